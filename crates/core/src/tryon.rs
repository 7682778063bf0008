//! Try-on request assembly.
//!
//! Gathers the user photo, the selected products' garment images, and a
//! style prompt into one [`TryOnRequest`]. Enforces the hard item cap
//! (generation quality and latency degrade with more reference images)
//! and synthesizes the default prompt when no override is given.
//!
//! The default prompt wording is a contract with the external model: it
//! must instruct the model to preserve the subject's face, body, and pose
//! and vary only the clothing.

use async_trait::async_trait;

use crate::catalog::Product;

/// Hard cap on garments per try-on request.
pub const MAX_OUTFIT_ITEMS: usize = 4;

/// Default prompt for image-to-video showcase generation.
pub const DEFAULT_VIDEO_PROMPT: &str = "A fashion model showcasing the outfit with natural, \
    elegant movements. The model should move gracefully, turning slightly to show the clothing \
    from different angles, with subtle body movements that highlight the fit and style of the \
    garments.";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum TryOnError {
    /// The user photo is absent or has no bytes.
    #[error("User image is required and must not be empty")]
    MissingUserImage,

    /// No products were selected.
    #[error("At least one clothing item is required")]
    EmptySelection,

    /// More products selected than the gateway handles well.
    #[error("Too many items selected: {count} (maximum {MAX_OUTFIT_ITEMS})")]
    TooManyItems { count: usize },

    /// A product's garment image could not be fetched.
    #[error("Failed to fetch image for '{product}': {detail}")]
    AssetFetch { product: String, detail: String },
}

/// Error produced by an [`ImageFetcher`] implementation.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ImageFetchError(pub String);

// ---------------------------------------------------------------------------
// Attachments and requests
// ---------------------------------------------------------------------------

/// Raw image bytes plus metadata, as attached to a try-on request.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub label: String,
}

impl ImageAttachment {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
            label: label.into(),
        }
    }
}

/// A fully assembled try-on request. Immutable once built.
#[derive(Debug, Clone)]
pub struct TryOnRequest {
    pub user_image: ImageAttachment,
    pub clothing_images: Vec<ImageAttachment>,
    pub style_prompt: String,
    pub item_count: usize,
}

impl TryOnRequest {
    /// Validate and assemble a request from already-fetched parts.
    ///
    /// `product_names` is the display list used for prompt synthesis when
    /// no override is given; `poses` are optional pose tags carried over
    /// from the upload stash.
    pub fn from_parts(
        user_image: ImageAttachment,
        clothing_images: Vec<ImageAttachment>,
        prompt_override: Option<String>,
        product_names: &str,
        poses: &[String],
    ) -> Result<Self, TryOnError> {
        if user_image.bytes.is_empty() {
            return Err(TryOnError::MissingUserImage);
        }
        if clothing_images.is_empty() {
            return Err(TryOnError::EmptySelection);
        }
        if clothing_images.len() > MAX_OUTFIT_ITEMS {
            return Err(TryOnError::TooManyItems {
                count: clothing_images.len(),
            });
        }

        let style_prompt = match prompt_override.filter(|p| !p.trim().is_empty()) {
            Some(p) => p,
            None => synthesize_prompt(product_names, poses),
        };

        let item_count = clothing_images.len();
        Ok(Self {
            user_image,
            clothing_images,
            style_prompt,
            item_count,
        })
    }
}

// ---------------------------------------------------------------------------
// Prompt synthesis
// ---------------------------------------------------------------------------

/// Build the deterministic default prompt for a set of product names and
/// pose tags.
///
/// The identity-preservation wording ("keep the person's face, body, and
/// pose exactly the same") is load-bearing; changing its intent changes
/// generation behaviour.
pub fn synthesize_prompt(product_names: &str, poses: &[String]) -> String {
    let mut prompt = format!(
        "The person in the first image is wearing the clothing items from the other images. \
         Keep the person's face, body, and pose exactly the same. Only replace their clothing \
         with the items shown in the clothing images: {product_names}. The result should look \
         natural and realistic, with proper lighting and shadows. The person should appear to \
         be wearing these specific clothing items."
    );
    if !poses.is_empty() {
        prompt.push_str(&format!(" Preferred pose: {}.", poses.join(", ")));
    }
    prompt
}

/// Flatten a selection into the comma-separated name list used in prompts
/// and shared-look records.
pub fn joined_product_names(selection: &[Product]) -> String {
    selection
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Assembly from a selection
// ---------------------------------------------------------------------------

/// Fetches an image URL to raw bytes. Implemented over HTTP by the
/// gateway crate; stubbed in tests.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, ImageFetchError>;
}

/// Result of fetching an image URL.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Assemble a try-on request from the current selection, fetching each
/// product's garment image through `fetcher`.
///
/// Fetch failures surface as [`TryOnError::AssetFetch`] naming the
/// offending product; assembly stops at the first failure.
pub async fn assemble<F: ImageFetcher + ?Sized>(
    user_image: ImageAttachment,
    selection: &[Product],
    prompt_override: Option<String>,
    poses: &[String],
    fetcher: &F,
) -> Result<TryOnRequest, TryOnError> {
    if selection.is_empty() {
        return Err(TryOnError::EmptySelection);
    }
    if selection.len() > MAX_OUTFIT_ITEMS {
        return Err(TryOnError::TooManyItems {
            count: selection.len(),
        });
    }

    let mut clothing_images = Vec::with_capacity(selection.len());
    for product in selection {
        let fetched =
            fetcher
                .fetch(&product.image)
                .await
                .map_err(|e| TryOnError::AssetFetch {
                    product: product.name.clone(),
                    detail: e.0,
                })?;
        clothing_images.push(ImageAttachment::new(
            fetched.bytes,
            fetched.content_type,
            product.name.clone(),
        ));
    }

    let names = joined_product_names(selection);
    TryOnRequest::from_parts(user_image, clothing_images, prompt_override, &names, poses)
}
