pub mod catalog;
pub mod health;
pub mod history;
pub mod shared_looks;
pub mod tryon;
pub mod upload;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                      list products (?category=)
///
/// /shared-looks                  list, create
/// /shared-looks/{id}             partial update (PATCH)
///
/// /upload                        store a user photo (multipart POST)
/// /virtual-try-on                generate a try-on image (multipart POST)
/// /video-generation              animate a look into a video (POST)
///
/// /looks/history                 recent generated looks (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Product catalog.
        .nest("/products", catalog::router())
        // Shared look persistence.
        .nest("/shared-looks", shared_looks::router())
        // User photo upload.
        .merge(upload::router())
        // Try-on image generation.
        .merge(tryon::router())
        // Look-to-video generation.
        .merge(video::router())
        // Generated-look history.
        .nest("/looks", history::router())
}
