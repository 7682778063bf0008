//! Route definition for user photo uploads.
//!
//! ```text
//! POST /upload      upload_photo (multipart, field "file")
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/upload", post(upload::upload_photo))
}
