//! Per-session try-on lifecycle state machine.
//!
//! ```text
//! Idle -> PhotoReady -> Ready -> Processing -> Completed
//!                         ^          |
//!                         +--failure-+          (retry without re-upload)
//!
//! Completed -> Sharing -> Shared
//!                 |
//!                 +-- share failure -> Completed
//! ```
//!
//! At most one generation is in flight per session: `Processing` is the
//! busy state, and a second submit is rejected rather than queued. No
//! cancellation exists; a submitted request runs to completion or error.

use serde::Serialize;

/// Session states for one try-on cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleState {
    Idle,
    PhotoReady,
    Ready,
    Processing,
    Completed,
    Sharing,
    Shared,
}

#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("Event '{event}' is not valid in state {from:?}")]
    InvalidTransition {
        from: CycleState,
        event: &'static str,
    },
}

/// Tracks one session's progress through the try-on cycle.
#[derive(Debug)]
pub struct TryOnCycle {
    state: CycleState,
}

impl Default for TryOnCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl TryOnCycle {
    pub fn new() -> Self {
        Self {
            state: CycleState::Idle,
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Whether a generation is currently in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, CycleState::Processing | CycleState::Sharing)
    }

    /// A user photo was provided.
    pub fn photo_selected(&mut self) -> Result<(), CycleError> {
        match self.state {
            CycleState::Idle | CycleState::PhotoReady => {
                self.state = CycleState::PhotoReady;
                Ok(())
            }
            from => Err(Self::invalid(from, "photo_selected")),
        }
    }

    /// At least one catalog item was selected.
    pub fn items_selected(&mut self) -> Result<(), CycleError> {
        match self.state {
            CycleState::PhotoReady | CycleState::Ready => {
                self.state = CycleState::Ready;
                Ok(())
            }
            from => Err(Self::invalid(from, "items_selected")),
        }
    }

    /// Submit the try-on request. Rejected while one is already running.
    pub fn submit(&mut self) -> Result<(), CycleError> {
        match self.state {
            CycleState::Ready => {
                self.state = CycleState::Processing;
                Ok(())
            }
            from => Err(Self::invalid(from, "submit")),
        }
    }

    /// The generation finished successfully.
    pub fn generation_succeeded(&mut self) -> Result<(), CycleError> {
        match self.state {
            CycleState::Processing => {
                self.state = CycleState::Completed;
                Ok(())
            }
            from => Err(Self::invalid(from, "generation_succeeded")),
        }
    }

    /// The generation failed; the user may retry without re-uploading.
    pub fn generation_failed(&mut self) -> Result<(), CycleError> {
        match self.state {
            CycleState::Processing => {
                self.state = CycleState::Ready;
                Ok(())
            }
            from => Err(Self::invalid(from, "generation_failed")),
        }
    }

    /// Start publishing the completed result.
    pub fn share(&mut self) -> Result<(), CycleError> {
        match self.state {
            CycleState::Completed => {
                self.state = CycleState::Sharing;
                Ok(())
            }
            from => Err(Self::invalid(from, "share")),
        }
    }

    pub fn share_succeeded(&mut self) -> Result<(), CycleError> {
        match self.state {
            CycleState::Sharing => {
                self.state = CycleState::Shared;
                Ok(())
            }
            from => Err(Self::invalid(from, "share_succeeded")),
        }
    }

    /// A failed share returns to `Completed` so the user can retry.
    pub fn share_failed(&mut self) -> Result<(), CycleError> {
        match self.state {
            CycleState::Sharing => {
                self.state = CycleState::Completed;
                Ok(())
            }
            from => Err(Self::invalid(from, "share_failed")),
        }
    }

    fn invalid(from: CycleState, event: &'static str) -> CycleError {
        CycleError::InvalidTransition { from, event }
    }
}
