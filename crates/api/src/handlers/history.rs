//! Handler for the generated-look history.

use axum::extract::State;
use axum::Json;
use lookbook_core::history::TryOnResult;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/looks/history
///
/// Recent generated looks, newest first, capped server-side.
pub async fn list_history(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TryOnResult>>>> {
    let entries = state.history.lock().await.list();
    Ok(Json(DataResponse::new(entries)))
}
