//! Domain logic for the Lookbook virtual try-on platform.
//!
//! This crate is independent of the HTTP layer and the external
//! collaborators. It contains:
//!
//! - [`catalog`] -- the built-in product catalog and category filters.
//! - [`selection`] -- the shared multi-select store with observer
//!   notification.
//! - [`stash`] -- the single-slot handoff mailbox for uploaded photos.
//! - [`tryon`] -- try-on request assembly, item-count enforcement, and
//!   prompt synthesis.
//! - [`cycle`] -- the per-session try-on state machine.
//! - [`history`] -- the capped, file-persisted result history.
//! - [`publish`] -- the shared-look publish workflow over collaborator
//!   traits.

pub mod catalog;
pub mod cycle;
pub mod error;
pub mod history;
pub mod publish;
pub mod selection;
pub mod stash;
pub mod tryon;
pub mod types;
