use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Where the generated-look history document is persisted.
    pub history_path: PathBuf,
    /// Base URL of the inference service.
    pub inference_api_url: String,
    /// Bearer token for the inference service.
    pub inference_token: String,
    /// Model slug for image try-on generation.
    pub tryon_model: String,
    /// Model slug for image-to-video generation.
    pub video_model: String,
    /// Base URL of the blob storage service.
    pub blob_store_url: String,
    /// Read-write token for the blob storage service.
    pub blob_store_token: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                            |
    /// |------------------------|------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                          |
    /// | `PORT`                 | `3000`                             |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`            |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                               |
    /// | `HISTORY_PATH`         | `./data/looks.json`                |
    /// | `REPLICATE_API_URL`    | `https://api.replicate.com`        |
    /// | `REPLICATE_API_TOKEN`  | (empty)                            |
    /// | `TRYON_MODEL`          | `google/nano-banana`               |
    /// | `VIDEO_MODEL`          | `google/veo-3-fast`                |
    /// | `BLOB_STORE_URL`       | `https://blob.vercel-storage.com`  |
    /// | `BLOB_READ_WRITE_TOKEN`| (empty)                            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let history_path = std::env::var("HISTORY_PATH")
            .unwrap_or_else(|_| "./data/looks.json".into())
            .into();

        let inference_api_url = std::env::var("REPLICATE_API_URL")
            .unwrap_or_else(|_| "https://api.replicate.com".into());
        let inference_token = std::env::var("REPLICATE_API_TOKEN").unwrap_or_default();

        let tryon_model =
            std::env::var("TRYON_MODEL").unwrap_or_else(|_| "google/nano-banana".into());
        let video_model =
            std::env::var("VIDEO_MODEL").unwrap_or_else(|_| "google/veo-3-fast".into());

        let blob_store_url = std::env::var("BLOB_STORE_URL")
            .unwrap_or_else(|_| "https://blob.vercel-storage.com".into());
        let blob_store_token = std::env::var("BLOB_READ_WRITE_TOKEN").unwrap_or_default();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            history_path,
            inference_api_url,
            inference_token,
            tryon_model,
            video_model,
            blob_store_url,
            blob_store_token,
        }
    }
}
