//! Shared-look models and DTOs.

use lookbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shared_looks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SharedLook {
    pub id: DbId,
    pub image_url: String,
    pub user_image_url: Option<String>,
    pub prompt: String,
    /// Flattened, comma-separated product names.
    pub product_names: String,
    /// Serialized product snapshots the look was generated from.
    pub selected_items: serde_json::Value,
    pub public: bool,
    pub video_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new shared look.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSharedLook {
    pub image_url: String,
    pub user_image_url: Option<String>,
    pub prompt: Option<String>,
    pub product_names: String,
    pub selected_items: Option<serde_json::Value>,
}

/// DTO for partially updating a shared look. Only `video_url` and
/// `public` are updatable; records are never deleted.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSharedLook {
    pub video_url: Option<String>,
    pub public: Option<bool>,
}

impl UpdateSharedLook {
    /// Whether the patch carries no recognized field.
    pub fn is_empty(&self) -> bool {
        self.video_url.is_none() && self.public.is_none()
    }
}
