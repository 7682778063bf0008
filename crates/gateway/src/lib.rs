//! Clients for the external collaborators: the model inference API, the
//! blob storage service, and plain HTTP image fetching.
//!
//! - [`inference`] -- REST client for Replicate-style model endpoints.
//! - [`output`] -- normalization of the gateway's heterogeneous output
//!   shapes into one canonical payload.
//! - [`storage`] -- blob store client producing durable public URLs.
//! - [`fetch`] -- HTTP image download, implementing the core
//!   `ImageFetcher` seam.

pub mod fetch;
pub mod inference;
pub mod output;
pub mod storage;

pub use fetch::{FetchError, HttpImageFetcher};
pub use inference::{InferenceClient, InferenceError};
pub use output::{from_data_uri, normalize_output, to_data_uri, ImagePayload, OutputError};
pub use storage::{BlobObject, BlobStore, StorageError};
