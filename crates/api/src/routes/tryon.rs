//! Route definition for try-on image generation.
//!
//! ```text
//! POST /virtual-try-on      generate_try_on (multipart)
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::tryon;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/virtual-try-on", post(tryon::generate_try_on))
}
