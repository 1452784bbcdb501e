//! Local filesystem storage for report images
//!
//! Files are stored flat under the upload directory as
//! `{timestamp_millis}-{uuid}.{ext}`. The name chosen by the uploader is
//! kept only as metadata and never becomes part of a filesystem path.

use chrono::Utc;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

/// Allowed MIME types for report images
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Maximum image size in bytes (10MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File type '{0}' is not allowed. Allowed types: image/jpeg, image/png, image/gif, image/webp")]
    UnsupportedType(String),

    #[error("File too large. Maximum size is {max} bytes")]
    TooLarge { max: usize },

    #[error("Upload I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a successful upload
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Generated name on disk
    pub file_name: String,
    /// Name the client sent with the upload
    pub original_name: String,
    /// Publicly fetchable URL
    pub url: String,
    pub size: usize,
}

/// Get file extension from content type
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

pub struct LocalStorage {
    root: PathBuf,
    public_base_url: String,
    public_path: String,
}

impl LocalStorage {
    pub fn new(
        root: impl Into<PathBuf>,
        public_base_url: impl Into<String>,
        public_path: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            public_path: public_path.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload directory (and parents) if it does not exist yet
    pub async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Public URL for a stored file name
    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}{}/{}", self.public_base_url, self.public_path, file_name)
    }

    /// Validate and write an uploaded image
    pub async fn store_image(
        &self,
        data: &[u8],
        original_name: &str,
        content_type: &str,
    ) -> Result<StoredFile, StorageError> {
        if data.len() > MAX_IMAGE_SIZE {
            return Err(StorageError::TooLarge {
                max: MAX_IMAGE_SIZE,
            });
        }

        let extension = extension_for_content_type(content_type)
            .ok_or_else(|| StorageError::UnsupportedType(content_type.to_string()))?;

        self.ensure_dir().await?;

        let file_name = format!(
            "{}-{}.{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            extension
        );
        let path = self.root.join(&file_name);

        fs::write(&path, data).await?;
        debug!("Upload written to {}", path.display());

        let stored = StoredFile {
            url: self.url_for(&file_name),
            original_name: original_name.to_string(),
            size: data.len(),
            file_name,
        };

        info!(
            "Stored upload: file={}, original={}, size={}",
            stored.file_name, stored.original_name, stored.size
        );

        Ok(stored)
    }

    /// Delete a previously stored file
    pub async fn remove(&self, file_name: &str) -> Result<(), StorageError> {
        fs::remove_file(self.root.join(file_name)).await?;
        info!("Removed upload: file={}", file_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &Path) -> LocalStorage {
        LocalStorage::new(dir.join("uploads"), "http://localhost:5000/", "/uploads")
    }

    #[tokio::test]
    async fn test_store_image_creates_directory_and_keeps_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = storage_in(tmp.path());
        assert!(!storage.root().exists());

        let bytes = vec![0x89, b'P', b'N', b'G', 1, 2, 3];
        let stored = storage
            .store_image(&bytes, "river.png", "image/png")
            .await
            .unwrap();

        assert!(storage.root().is_dir());
        let on_disk = std::fs::read(storage.root().join(&stored.file_name)).unwrap();
        assert_eq!(on_disk, bytes);
        assert_eq!(stored.original_name, "river.png");
        assert_eq!(
            stored.url,
            format!("http://localhost:5000/uploads/{}", stored.file_name)
        );
        assert!(stored.file_name.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_original_name_never_reaches_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = storage_in(tmp.path());

        let stored = storage
            .store_image(b"gif", "../../etc/passwd.gif", "image/gif")
            .await
            .unwrap();

        assert!(!stored.file_name.contains("passwd"));
        assert!(!stored.file_name.contains('/'));
        assert!(storage.root().join(&stored.file_name).is_file());
    }

    #[tokio::test]
    async fn test_same_name_uploads_do_not_collide() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = storage_in(tmp.path());

        let a = storage.store_image(b"a", "photo.jpg", "image/jpeg").await.unwrap();
        let b = storage.store_image(b"b", "photo.jpg", "image/jpeg").await.unwrap();

        assert_ne!(a.file_name, b.file_name);
    }

    #[tokio::test]
    async fn test_rejects_non_image_types() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = storage_in(tmp.path());

        let result = storage
            .store_image(b"%PDF", "report.pdf", "application/pdf")
            .await;

        assert!(matches!(result, Err(StorageError::UnsupportedType(_))));
    }

    #[tokio::test]
    async fn test_rejects_oversized_files() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = storage_in(tmp.path());

        let data = vec![0u8; MAX_IMAGE_SIZE + 1];
        let result = storage.store_image(&data, "big.png", "image/png").await;

        assert!(matches!(result, Err(StorageError::TooLarge { .. })));
    }

    #[tokio::test]
    async fn test_remove_deletes_stored_file() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = storage_in(tmp.path());
        let stored = storage.store_image(b"png", "a.png", "image/png").await.unwrap();

        storage.remove(&stored.file_name).await.unwrap();

        assert!(!storage.root().join(&stored.file_name).exists());
        assert!(matches!(
            storage.remove(&stored.file_name).await,
            Err(StorageError::Io(_))
        ));
    }

    #[test]
    fn test_extension_for_content_type() {
        assert_eq!(extension_for_content_type("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for_content_type("image/webp"), Some("webp"));
        assert_eq!(extension_for_content_type("text/html"), None);
    }
}
