//! Handler for look-to-video generation.
//!
//! Animates a generated try-on image into a short showcase video via the
//! image-to-video model, then stores the result durably.

use axum::extract::State;
use axum::Json;
use lookbook_core::tryon::DEFAULT_VIDEO_PROMPT;
use lookbook_gateway::{normalize_output, ImagePayload};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for video generation.
#[derive(Debug, Deserialize)]
pub struct GenerateVideoBody {
    /// URL of the try-on image to animate.
    pub image_url: Option<String>,
    /// Optional motion prompt override.
    pub prompt: Option<String>,
}

/// Response for a generated video.
#[derive(Debug, Serialize)]
pub struct VideoResponse {
    /// Durable URL of the generated video.
    pub video_url: String,
    /// The motion prompt that was used.
    pub prompt: String,
}

/// POST /api/v1/video-generation
///
/// Animate a try-on image into a short vertical showcase video.
pub async fn generate_video(
    State(state): State<AppState>,
    Json(body): Json<GenerateVideoBody>,
) -> AppResult<Json<VideoResponse>> {
    let Some(image_url) = body.image_url.filter(|s| !s.trim().is_empty()) else {
        return Err(AppError::BadRequest("Image URL is required".to_string()));
    };

    let prompt = body
        .prompt
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_VIDEO_PROMPT.to_string());

    let input = serde_json::json!({
        "image": image_url,
        "prompt": prompt,
        "duration": 5,
        "aspect_ratio": "9:16",
        "loop": false,
    });

    tracing::info!("Submitting video generation request");
    let raw = state.inference.run(&state.config.video_model, &input).await?;

    let bytes = match normalize_output(&raw)? {
        ImagePayload::Url(url) => {
            let (bytes, _) = state.fetcher.fetch_bytes(&url).await?;
            bytes
        }
        ImagePayload::Bytes(bytes) => bytes,
    };

    let pathname = format!(
        "fashion-video-{}.mp4",
        chrono::Utc::now().timestamp_millis()
    );
    let object = state.blob.put(&pathname, bytes, "video/mp4").await?;

    Ok(Json(VideoResponse {
        video_url: object.url,
        prompt,
    }))
}
