use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lookbook_core::error::CoreError;
use lookbook_core::tryon::TryOnError;
use lookbook_gateway::{FetchError, InferenceError, OutputError, StorageError};
use serde_json::json;

/// Application-wide error type.
///
/// Converts lower-layer errors into HTTP responses with a JSON body of
/// the form `{"error": "...", "code": "..."}`. Upstream service failures
/// are logged in full but reported to clients with a generic message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    TryOn(#[from] TryOnError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                self.to_string(),
            ),
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
            ),
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::TryOn(TryOnError::TooManyItems { .. }) => (
                StatusCode::BAD_REQUEST,
                "TOO_MANY_ITEMS",
                self.to_string(),
            ),
            AppError::TryOn(TryOnError::AssetFetch { .. }) => {
                tracing::error!(error = %self, "Failed to fetch garment asset");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    self.to_string(),
                )
            }
            AppError::TryOn(_) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            AppError::Database(sqlx::Error::RowNotFound) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Inference(e) => {
                tracing::error!(error = %e, "Inference service error");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The generation service failed to process the request".to_string(),
                )
            }
            AppError::Storage(e) => {
                tracing::error!(error = %e, "Blob storage error");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "Failed to store the generated asset".to_string(),
                )
            }
            AppError::Fetch(e) => {
                tracing::error!(error = %e, "Image download error");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "Failed to download a required image".to_string(),
                )
            }
            AppError::Output(e) => {
                tracing::error!(error = %e, "Unrecognized inference output");
                (
                    StatusCode::BAD_GATEWAY,
                    "UNRECOGNIZED_OUTPUT",
                    "The generation service returned an unrecognized result".to_string(),
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
