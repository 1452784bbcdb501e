//! Storage module for uploaded report images
//!
//! Writes uploads to a local directory served as static files and
//! computes the public URL stored on the report.

mod local_storage;

pub use local_storage::{LocalStorage, StorageError, ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE};
