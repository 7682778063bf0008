//! Blob storage client.
//!
//! Stores raw bytes under a chosen pathname and returns a publicly
//! addressable URL (Vercel-Blob-style REST: `PUT {base}/{pathname}` with
//! a bearer token). Also implements the core
//! [`BlobUploader`](lookbook_core::publish::BlobUploader) seam so the
//! publish workflow can use it directly.

use async_trait::async_trait;
use lookbook_core::publish::{BlobUploader, UploadError};
use serde::Deserialize;

/// HTTP client for the blob storage service.
pub struct BlobStore {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

/// A stored object: its public URL and the pathname it was stored under.
#[derive(Debug, Clone, Deserialize)]
pub struct BlobObject {
    pub url: String,
    pub pathname: String,
}

/// Errors from the blob storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Blob store error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl BlobStore {
    /// Create a new client.
    ///
    /// * `base_url` - Base HTTP URL of the store.
    /// * `token`    - Read-write token sent as a bearer credential.
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url,
            token,
        }
    }

    /// Store `bytes` under `pathname` with public access, returning the
    /// durable object.
    pub async fn put(
        &self,
        pathname: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<BlobObject, StorageError> {
        let response = self
            .client
            .put(format!("{}/{pathname}", self.base_url))
            .bearer_auth(&self.token)
            .header("x-content-type", content_type)
            .query(&[("access", "public")])
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StorageError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let object = response.json::<BlobObject>().await?;
        tracing::debug!(pathname = %object.pathname, "Stored blob");
        Ok(object)
    }
}

#[async_trait]
impl BlobUploader for BlobStore {
    async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, UploadError> {
        self.put(filename, bytes, content_type)
            .await
            .map(|object| object.url)
            .map_err(|e| UploadError(e.to_string()))
    }
}
