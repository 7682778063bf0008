//! Route definitions for generated-look history.
//!
//! Mounted at `/looks`.
//!
//! ```text
//! GET  /history      list_history
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/history", get(history::list_history))
}
