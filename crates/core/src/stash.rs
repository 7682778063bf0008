//! Single-slot handoff mailbox for uploaded user photos.
//!
//! The upload surface and the try-on surface have no shared parent, so a
//! freshly uploaded photo is passed between them through a [`StashSlot`]:
//! `stash` overwrites the slot and wakes any waiter, `consume` takes the
//! record out. The record is session-scoped and carries the chosen pose
//! tags alongside the durable URL.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tokio::sync::Notify;

use crate::types::Timestamp;

/// The record passed from the upload surface to the try-on surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StashedImage {
    /// Durable URL of the uploaded photo.
    pub url: String,
    /// Pose tags chosen at upload time, folded into the default prompt.
    pub poses: Vec<String>,
    /// When the record was stashed (UTC).
    pub timestamp: Timestamp,
}

impl StashedImage {
    pub fn new(url: impl Into<String>, poses: Vec<String>) -> Self {
        Self {
            url: url.into(),
            poses,
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Single-slot mailbox with wakeup notification.
///
/// Stashing twice without a consume overwrites the older record; consuming
/// an empty slot returns `None`. Shared via `Arc<StashSlot>`.
#[derive(Default)]
pub struct StashSlot {
    slot: Mutex<Option<StashedImage>>,
    notify: Notify,
}

impl StashSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, replacing any previous one, and wake waiters.
    pub fn stash(&self, record: StashedImage) {
        *self.slot.lock().expect("stash slot poisoned") = Some(record);
        self.notify.notify_waiters();
    }

    /// Take the stashed record, leaving the slot empty.
    pub fn consume(&self) -> Option<StashedImage> {
        self.slot.lock().expect("stash slot poisoned").take()
    }

    /// Wait until the next `stash` call.
    ///
    /// Pair with [`consume`](Self::consume); the notification itself does
    /// not transfer the record.
    pub async fn notified(&self) {
        self.notify.notified().await;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.lock().expect("stash slot poisoned").is_none()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn consume_empties_the_slot() {
        let slot = StashSlot::new();
        assert!(slot.consume().is_none());

        slot.stash(StashedImage::new("https://blob/u1.jpg", vec![]));
        let record = slot.consume().unwrap();
        assert_eq!(record.url, "https://blob/u1.jpg");
        assert!(slot.is_empty());
        assert!(slot.consume().is_none());
    }

    #[test]
    fn stash_overwrites_previous_record() {
        let slot = StashSlot::new();
        slot.stash(StashedImage::new("https://blob/old.jpg", vec![]));
        slot.stash(StashedImage::new(
            "https://blob/new.jpg",
            vec!["standing".into()],
        ));

        let record = slot.consume().unwrap();
        assert_eq!(record.url, "https://blob/new.jpg");
        assert_eq!(record.poses, vec!["standing".to_string()]);
    }

    #[tokio::test]
    async fn waiter_is_woken_by_stash() {
        let slot = Arc::new(StashSlot::new());
        let waiter = Arc::clone(&slot);

        let handle = tokio::spawn(async move {
            waiter.notified().await;
            waiter.consume()
        });

        // Give the waiter a chance to park before stashing.
        tokio::task::yield_now().await;
        slot.stash(StashedImage::new("https://blob/woken.jpg", vec![]));

        let received = handle.await.unwrap().unwrap();
        assert_eq!(received.url, "https://blob/woken.jpg");
    }
}
