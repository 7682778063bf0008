//! HTTP image fetching.
//!
//! Downloads garment images and gateway result URLs to raw bytes.
//! Implements the core [`ImageFetcher`] seam used by try-on assembly.

use async_trait::async_trait;
use lookbook_core::tryon::{FetchedImage, ImageFetchError, ImageFetcher};

/// Errors from downloading an image URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("Failed to download {url}: status {status}")]
    Status { status: u16, url: String },
}

/// Content type assumed when the server does not state one.
const FALLBACK_CONTENT_TYPE: &str = "image/jpeg";

/// Downloads image URLs over HTTP.
#[derive(Default)]
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Download a URL to raw bytes plus its reported content type.
    pub async fn fetch_bytes(&self, url: &str) -> Result<(Vec<u8>, String), FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        let bytes = response.bytes().await?.to_vec();
        Ok((bytes, content_type))
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, ImageFetchError> {
        let (bytes, content_type) = self
            .fetch_bytes(url)
            .await
            .map_err(|e| ImageFetchError(e.to_string()))?;
        Ok(FetchedImage {
            bytes,
            content_type,
        })
    }
}
