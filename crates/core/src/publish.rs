//! Publish workflow: turn a generated look into a shared-look record.
//!
//! Publishing uploads the original user photo when it is not already
//! durable, then writes the record through a [`SharedLookSink`]. Losing
//! the paired user photo is acceptable; losing the share is not, so an
//! upload failure downgrades to `user_image_url = None` with a warning
//! instead of aborting.

use async_trait::async_trait;
use serde_json::json;

use crate::catalog::Product;
use crate::history::TryOnResult;
use crate::tryon::joined_product_names;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Collaborator seams
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
#[error("Upload failed: {0}")]
pub struct UploadError(pub String);

#[derive(Debug, thiserror::Error)]
#[error("Shared look write failed: {0}")]
pub struct SinkError(pub String);

/// Stores raw bytes durably and returns a public URL. Implemented over
/// the blob storage service by the gateway crate.
#[async_trait]
pub trait BlobUploader: Send + Sync {
    async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, UploadError>;
}

/// Writes a shared-look record. Implemented over the database by the API
/// crate.
#[async_trait]
pub trait SharedLookSink: Send + Sync {
    async fn create_look(&self, draft: &SharedLookDraft) -> Result<DbId, SinkError>;
}

// ---------------------------------------------------------------------------
// Draft and inputs
// ---------------------------------------------------------------------------

/// The record shape handed to the sink.
#[derive(Debug, Clone)]
pub struct SharedLookDraft {
    pub image_url: String,
    pub user_image_url: Option<String>,
    pub prompt: String,
    pub product_names: String,
    pub selected_items: serde_json::Value,
}

/// The original user photo accompanying a publish.
#[derive(Debug, Clone)]
pub enum UserPhoto {
    /// Already stored at a durable URL.
    Durable(String),
    /// Still raw bytes; must be uploaded first.
    Pending { bytes: Vec<u8>, content_type: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error(transparent)]
    Sink(#[from] SinkError),
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// Publish a generated look as a shared record, returning the new id.
pub async fn publish_look(
    result: &TryOnResult,
    selection: &[Product],
    user_photo: Option<UserPhoto>,
    uploader: &dyn BlobUploader,
    sink: &dyn SharedLookSink,
) -> Result<DbId, PublishError> {
    let user_image_url = match user_photo {
        Some(UserPhoto::Durable(url)) => Some(url),
        Some(UserPhoto::Pending {
            bytes,
            content_type,
        }) => {
            let filename = format!("user-images/shared-{}.jpg", uuid::Uuid::new_v4());
            match uploader.upload(&filename, bytes, &content_type).await {
                Ok(url) => Some(url),
                Err(e) => {
                    // The shared result is higher-value than the paired
                    // original photo; publish without it.
                    tracing::warn!(error = %e, "User photo upload failed, sharing without it");
                    None
                }
            }
        }
        None => None,
    };

    let draft = SharedLookDraft {
        image_url: result.result_image_url.clone(),
        user_image_url,
        prompt: result.prompt_used.clone(),
        product_names: joined_product_names(selection),
        selected_items: json!(selection),
    };

    let id = sink.create_look(&draft).await?;
    tracing::info!(id, "Shared look published");
    Ok(id)
}
