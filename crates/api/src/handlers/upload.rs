//! Handler for user photo uploads.
//!
//! Accepts a multipart photo, stores it durably under a
//! collision-resistant pathname, and returns the public URL. Clients use
//! that URL as the try-on subject image.

use axum::extract::{Multipart, State};
use axum::Json;
use rand::Rng;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for a stored photo.
#[derive(Debug, Serialize)]
pub struct UploadResult {
    /// Public URL of the stored photo.
    pub url: String,
    /// Pathname the photo was stored under.
    pub filename: String,
}

/// POST /api/v1/upload
///
/// Store a user photo from the multipart field `file`.
pub async fn upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResult>> {
    let mut file: Option<(Vec<u8>, String, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("photo.jpg").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("image/jpeg")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
            .to_vec();
        file = Some((bytes, content_type, filename));
    }

    let Some((bytes, content_type, filename)) = file else {
        return Err(AppError::BadRequest("No file provided".to_string()));
    };
    if bytes.is_empty() {
        return Err(AppError::BadRequest("No file provided".to_string()));
    }

    let pathname = build_pathname(&filename);
    let object = state.blob.put(&pathname, bytes, &content_type).await?;

    tracing::info!(pathname = %object.pathname, "Stored user photo");
    Ok(Json(UploadResult {
        url: object.url,
        filename: object.pathname,
    }))
}

/// Build a collision-resistant pathname: timestamp plus a short random
/// suffix, preserving the original extension.
fn build_pathname(filename: &str) -> String {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or("jpg");

    let stamp = chrono::Utc::now().timestamp_millis();
    let suffix: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(10)
        .map(char::from)
        .collect();

    format!("user-images/{stamp}-{suffix}.{ext}")
}
