use std::sync::Arc;

use lookbook_core::history::HistoryLog;
use lookbook_gateway::{BlobStore, HttpImageFetcher, InferenceClient};
use tokio::sync::Mutex;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lookbook_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the image/video generation service.
    pub inference: Arc<InferenceClient>,
    /// Client for durable blob storage.
    pub blob: Arc<BlobStore>,
    /// HTTP downloader for garment and result images.
    pub fetcher: Arc<HttpImageFetcher>,
    /// In-memory log of generated looks, persisted to disk after writes.
    pub history: Arc<Mutex<HistoryLog>>,
}
