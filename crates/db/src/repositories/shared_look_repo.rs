//! Repository for the `shared_looks` table.

use lookbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::shared_look::{CreateSharedLook, SharedLook, UpdateSharedLook};

const COLUMNS: &str = "id, image_url, user_image_url, prompt, product_names, \
     selected_items, public, video_url, created_at, updated_at";

/// Provides CRUD operations for shared looks.
pub struct SharedLookRepo;

impl SharedLookRepo {
    /// Insert a new shared look, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSharedLook,
    ) -> Result<SharedLook, sqlx::Error> {
        let query = format!(
            "INSERT INTO shared_looks \
                (image_url, user_image_url, prompt, product_names, selected_items) \
             VALUES ($1, $2, COALESCE($3, ''), $4, COALESCE($5, '[]'::jsonb)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SharedLook>(&query)
            .bind(&input.image_url)
            .bind(&input.user_image_url)
            .bind(&input.prompt)
            .bind(&input.product_names)
            .bind(&input.selected_items)
            .fetch_one(pool)
            .await
    }

    /// Find a shared look by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SharedLook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shared_looks WHERE id = $1");
        sqlx::query_as::<_, SharedLook>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All shared looks, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SharedLook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shared_looks ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, SharedLook>(&query).fetch_all(pool).await
    }

    /// Apply a partial update. Only non-`None` fields are written.
    /// Returns `None` when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSharedLook,
    ) -> Result<Option<SharedLook>, sqlx::Error> {
        let query = format!(
            "UPDATE shared_looks SET \
                video_url = COALESCE($2, video_url), \
                public = COALESCE($3, public), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SharedLook>(&query)
            .bind(id)
            .bind(&input.video_url)
            .bind(input.public)
            .fetch_optional(pool)
            .await
    }
}
