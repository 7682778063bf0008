pub mod catalog;
pub mod history;
pub mod shared_looks;
pub mod tryon;
pub mod upload;
pub mod video;
