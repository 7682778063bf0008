//! Route definition for look-to-video generation.
//!
//! ```text
//! POST /video-generation      generate_video (JSON)
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/video-generation", post(video::generate_video))
}
