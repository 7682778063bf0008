//! Route definitions for the product catalog.
//!
//! Mounted at `/products`.
//!
//! ```text
//! GET  /          list_products (?category=)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(catalog::list_products))
}
