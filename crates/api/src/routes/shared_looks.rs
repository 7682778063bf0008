//! Route definitions for shared looks.
//!
//! Mounted at `/shared-looks`.
//!
//! ```text
//! GET   /          list_shared_looks
//! POST  /          create_shared_look
//! PATCH /{id}      update_shared_look
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::shared_looks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(shared_looks::list_shared_looks).post(shared_looks::create_shared_look),
        )
        .route("/{id}", patch(shared_looks::update_shared_look))
}
