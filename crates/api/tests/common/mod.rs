use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use rand::Rng;
use sqlx::PgPool;
use tokio::sync::Mutex;
use tower::ServiceExt;

use lookbook_api::config::ServerConfig;
use lookbook_api::router::build_app_router;
use lookbook_api::state::AppState;
use lookbook_core::history::HistoryLog;
use lookbook_gateway::{BlobStore, HttpImageFetcher, InferenceClient};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a unique temp file for look history.
/// Gateway URLs point at an unroutable local port; tests never reach them.
pub fn test_config() -> ServerConfig {
    let suffix: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        history_path: std::env::temp_dir().join(format!("lookbook-history-{suffix}.json")),
        inference_api_url: "http://127.0.0.1:1".to_string(),
        inference_token: "test-token".to_string(),
        tryon_model: "google/nano-banana".to_string(),
        video_model: "google/veo-3-fast".to_string(),
        blob_store_url: "http://127.0.0.1:1".to_string(),
        blob_store_token: "test-token".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Uses the same [`build_app_router`] as `main.rs` so integration tests
/// exercise the exact production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        inference: Arc::new(InferenceClient::new(
            config.inference_api_url.clone(),
            config.inference_token.clone(),
        )),
        blob: Arc::new(BlobStore::new(
            config.blob_store_url.clone(),
            config.blob_store_token.clone(),
        )),
        fetcher: Arc::new(HttpImageFetcher::new()),
        history: Arc::new(Mutex::new(HistoryLog::new())),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Perform a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Perform a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Perform a PATCH request with a JSON body.
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PATCH")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
