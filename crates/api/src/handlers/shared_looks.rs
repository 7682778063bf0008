//! Handlers for shared-look persistence.
//!
//! Shared looks are generated try-on images a user chose to publish.
//! They are append-only apart from a narrow PATCH surface (`video_url`
//! and `public`); records are never deleted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lookbook_core::error::CoreError;
use lookbook_core::publish::BlobUploader;
use lookbook_core::types::DbId;
use lookbook_db::models::shared_look::{CreateSharedLook, SharedLook, UpdateSharedLook};
use lookbook_db::repositories::SharedLookRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for creating a shared look. All fields optional at the
/// deserialization layer so validation can produce a uniform 400 instead
/// of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct CreateSharedLookBody {
    pub image_url: Option<String>,
    pub user_image_url: Option<String>,
    pub prompt: Option<String>,
    pub product_names: Option<String>,
    pub selected_items: Option<serde_json::Value>,
}

/// POST /api/v1/shared-looks
///
/// Persist a generated look. `image_url` and `product_names` are
/// required; everything else is optional.
pub async fn create_shared_look(
    State(state): State<AppState>,
    Json(body): Json<CreateSharedLookBody>,
) -> AppResult<(StatusCode, Json<DataResponse<SharedLook>>)> {
    let image_url = body.image_url.filter(|s| !s.trim().is_empty());
    let product_names = body.product_names.filter(|s| !s.trim().is_empty());

    let (image_url, product_names) = match (image_url, product_names) {
        (Some(i), Some(p)) => (i, p),
        _ => {
            return Err(AppError::BadRequest(
                "Image URL and product names are required".to_string(),
            ))
        }
    };

    let user_image_url = durable_user_image_url(&state, body.user_image_url).await;

    let look = SharedLookRepo::create(
        &state.pool,
        &CreateSharedLook {
            image_url,
            user_image_url,
            prompt: body.prompt,
            product_names,
            selected_items: body.selected_items,
        },
    )
    .await?;

    tracing::info!(look_id = look.id, "Created shared look");
    Ok((StatusCode::CREATED, Json(DataResponse::new(look))))
}

/// Clients may send the user photo as an inline data URI rather than a
/// stored URL. Re-store it durably before recording; losing the paired
/// photo is acceptable, so an upload failure downgrades to `None` with a
/// warning instead of failing the share.
async fn durable_user_image_url(state: &AppState, url: Option<String>) -> Option<String> {
    let url = url.filter(|s| !s.trim().is_empty())?;
    if !url.starts_with("data:") {
        return Some(url);
    }

    let Some((content_type, bytes)) = lookbook_gateway::from_data_uri(&url) else {
        tracing::warn!("Malformed data-URI user photo, sharing without it");
        return None;
    };

    let filename = format!("user-images/shared-{}.jpg", uuid::Uuid::new_v4());
    match state.blob.upload(&filename, bytes, &content_type).await {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!(error = %e, "User photo upload failed, sharing without it");
            None
        }
    }
}

/// GET /api/v1/shared-looks
///
/// All shared looks, newest first.
pub async fn list_shared_looks(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SharedLook>>>> {
    let looks = SharedLookRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse::new(looks)))
}

/// PATCH /api/v1/shared-looks/{id}
///
/// Partial update of `video_url` and/or `public`. An empty patch is a
/// 400; an unknown id is a 404.
pub async fn update_shared_look(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSharedLook>,
) -> AppResult<Json<DataResponse<SharedLook>>> {
    if input.is_empty() {
        return Err(AppError::BadRequest(
            "No update fields provided".to_string(),
        ));
    }

    let look = SharedLookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "SharedLook",
            id,
        })?;

    Ok(Json(DataResponse::new(look)))
}
