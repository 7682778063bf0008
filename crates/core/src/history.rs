//! Capped, file-persisted history of generated looks.
//!
//! Every successful generation is prepended; anything beyond the cap of
//! 20 entries falls off the tail. The log is persisted as a small JSON
//! key-value document (key `generatedLooks`) so it survives restarts, the
//! server-side stand-in for the browser's local storage.

use std::collections::VecDeque;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::Timestamp;

/// Maximum number of retained history entries.
pub const HISTORY_CAP: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Failed to read history file: {0}")]
    Io(#[from] std::io::Error),

    #[error("History file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// TryOnResult
// ---------------------------------------------------------------------------

/// One generated look, created on a successful gateway response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TryOnResult {
    pub id: String,
    pub result_image_url: String,
    pub prompt_used: String,
    pub created_at: Timestamp,
    /// Snapshot of the products the look was generated from.
    pub source_items: Vec<Product>,
}

impl TryOnResult {
    pub fn new(
        result_image_url: impl Into<String>,
        prompt_used: impl Into<String>,
        source_items: Vec<Product>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            result_image_url: result_image_url.into(),
            prompt_used: prompt_used.into(),
            created_at: chrono::Utc::now(),
            source_items,
        }
    }
}

// ---------------------------------------------------------------------------
// HistoryLog
// ---------------------------------------------------------------------------

/// Newest-first log of generated looks, truncated to [`HISTORY_CAP`].
#[derive(Debug, Default, Clone)]
pub struct HistoryLog {
    entries: VecDeque<TryOnResult>,
}

/// On-disk document shape: `{"generatedLooks": [...]}`.
#[derive(Serialize, Deserialize)]
struct HistoryDocument {
    #[serde(rename = "generatedLooks")]
    generated_looks: Vec<TryOnResult>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a result and evict the oldest entries beyond the cap.
    pub fn record(&mut self, result: TryOnResult) {
        self.entries.push_front(result);
        self.entries.truncate(HISTORY_CAP);
    }

    /// All retained results, newest first.
    pub fn list(&self) -> Vec<TryOnResult> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the log from `path`. A missing file yields an empty log; a
    /// present-but-corrupt file is an error so the caller can decide.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let raw = std::fs::read_to_string(path)?;
        let doc: HistoryDocument = serde_json::from_str(&raw)?;
        let mut entries: VecDeque<_> = doc.generated_looks.into();
        entries.truncate(HISTORY_CAP);
        Ok(Self { entries })
    }

    /// Persist the log to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let doc = HistoryDocument {
            generated_looks: self.list(),
        };
        let raw = serde_json::to_string_pretty(&doc)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}
