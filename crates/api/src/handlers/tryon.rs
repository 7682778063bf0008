//! Handler for try-on image generation.
//!
//! Accepts a multipart request carrying the user photo, up to four
//! garment images, and optional prompt metadata. Assembles a validated
//! try-on request, submits it to the generation service, re-stores the
//! result durably, and records it in the history log.

use axum::extract::{Multipart, State};
use axum::Json;
use lookbook_core::catalog;
use lookbook_core::history::TryOnResult;
use lookbook_core::tryon::{ImageAttachment, TryOnRequest};
use lookbook_gateway::{normalize_output, to_data_uri, ImagePayload};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for a generated try-on image.
#[derive(Debug, Serialize)]
pub struct TryOnResponse {
    /// Durable URL of the generated image.
    pub output: String,
    /// The generation service's own (possibly time-limited) URL, when it
    /// produced one.
    #[serde(rename = "originalUrl")]
    pub original_url: Option<String>,
}

/// Multipart field prefix for garment images. Fields arrive as
/// `clothingImage_0`, `clothingImage_1`, ...
const CLOTHING_FIELD_PREFIX: &str = "clothingImage_";

/// POST /api/v1/virtual-try-on
///
/// Generate a try-on image from a user photo and selected garments.
pub async fn generate_try_on(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<TryOnResponse>> {
    let mut user_image: Option<ImageAttachment> = None;
    let mut prompt: Option<String> = None;
    let mut product_names = String::new();
    let mut poses: Vec<String> = Vec::new();
    let mut garments: Vec<(usize, ImageAttachment)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "userImage" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("image/jpeg")
                    .to_string();
                let label = field.file_name().unwrap_or("user").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                    .to_vec();
                user_image = Some(ImageAttachment::new(bytes, content_type, label));
            }
            "prompt" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                prompt = Some(text);
            }
            "productNames" => {
                product_names = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "poses" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                poses = text
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            _ => {
                if let Some(index) = name.strip_prefix(CLOTHING_FIELD_PREFIX) {
                    let index: usize = index.parse().map_err(|_| {
                        AppError::BadRequest(format!("Invalid clothing field name: {name}"))
                    })?;
                    let content_type = field
                        .content_type()
                        .unwrap_or("image/jpeg")
                        .to_string();
                    let label = field
                        .file_name()
                        .unwrap_or("garment")
                        .to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?
                        .to_vec();
                    garments.push((index, ImageAttachment::new(bytes, content_type, label)));
                }
                // Unknown fields are ignored.
            }
        }
    }

    let Some(user_image) = user_image else {
        return Err(AppError::BadRequest("User image is required".to_string()));
    };

    // Field order over the wire is not guaranteed.
    garments.sort_by_key(|(index, _)| *index);
    let clothing_images: Vec<_> = garments.into_iter().map(|(_, img)| img).collect();

    let request =
        TryOnRequest::from_parts(user_image, clothing_images, prompt, &product_names, &poses)?;

    tracing::info!(
        items = request.item_count,
        "Submitting try-on generation request"
    );

    let mut image_input = Vec::with_capacity(request.item_count + 1);
    image_input.push(to_data_uri(
        &request.user_image.bytes,
        &request.user_image.content_type,
    ));
    for garment in &request.clothing_images {
        image_input.push(to_data_uri(&garment.bytes, &garment.content_type));
    }

    let input = serde_json::json!({
        "prompt": request.style_prompt,
        "image_input": image_input,
        "output_format": "jpg",
    });

    let raw = state.inference.run(&state.config.tryon_model, &input).await?;
    let payload = normalize_output(&raw)?;

    // Re-store the result under our own blob store; gateway URLs can be
    // time-limited.
    let (bytes, original_url) = match payload {
        ImagePayload::Url(url) => {
            let (bytes, _) = state.fetcher.fetch_bytes(&url).await?;
            (bytes, Some(url))
        }
        ImagePayload::Bytes(bytes) => (bytes, None),
    };

    let pathname = format!(
        "virtual-try-on-{}.jpg",
        chrono::Utc::now().timestamp_millis()
    );
    let object = state.blob.put(&pathname, bytes, "image/jpeg").await?;

    record_history(&state, &object.url, &request.style_prompt, &product_names).await;

    Ok(Json(TryOnResponse {
        output: object.url,
        original_url,
    }))
}

/// Record a successful generation in the history log and persist it.
/// History failures are logged, never surfaced; the generated image is
/// already durable at this point.
async fn record_history(state: &AppState, image_url: &str, prompt: &str, product_names: &str) {
    let source_items = product_names
        .split(',')
        .map(str::trim)
        .filter_map(catalog::find_product_by_name)
        .collect();

    let mut history = state.history.lock().await;
    history.record(TryOnResult::new(image_url, prompt, source_items));
    if let Err(e) = history.save(&state.config.history_path) {
        tracing::warn!(error = %e, "Failed to persist look history");
    }
}
