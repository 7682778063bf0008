//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod shared_look_repo;

pub use shared_look_repo::SharedLookRepo;
