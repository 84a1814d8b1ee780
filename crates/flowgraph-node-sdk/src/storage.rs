//! Static file persistence collaborator.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::NodeError;

/// The host's static file storage service, as seen by a node.
///
/// `save` takes ownership of the bytes under `filename` and returns an
/// opaque reference URL the rest of the graph can use to address the file.
#[async_trait]
pub trait StaticFileStore: Send + Sync {
    async fn save(&self, bytes: &[u8], filename: &str) -> Result<String, NodeError>;
}

/// File store writing into a local directory, returning `file://` URLs.
///
/// The standalone runner uses this; the real host substitutes its own
/// storage service.
pub struct LocalStaticFileStore {
    root: PathBuf,
}

impl LocalStaticFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl StaticFileStore for LocalStaticFileStore {
    async fn save(&self, bytes: &[u8], filename: &str) -> Result<String, NodeError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| NodeError::Storage(format!("Failed to create {}: {}", self.root.display(), e)))?;

        let path = self.root.join(filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| NodeError::Storage(format!("Failed to write {}: {}", path.display(), e)))?;

        Ok(format!("file://{}", path.display()))
    }
}

/// In-memory file store for tests: remembers every saved file.
#[derive(Default)]
pub struct MemoryFileStore {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved `(filename, bytes)` pairs, in order.
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl StaticFileStore for MemoryFileStore {
    async fn save(&self, bytes: &[u8], filename: &str) -> Result<String, NodeError> {
        self.saved
            .lock()
            .unwrap()
            .push((filename.to_string(), bytes.to_vec()));
        Ok(format!("memory://{filename}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_store_writes_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStaticFileStore::new(dir.path());

        let url = store.save(b"payload", "image.jpg").await.unwrap();
        assert!(url.starts_with("file://"));
        assert!(url.ends_with("image.jpg"));

        let written = std::fs::read(dir.path().join("image.jpg")).unwrap();
        assert_eq!(written, b"payload");
    }

    #[tokio::test]
    async fn local_store_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStaticFileStore::new(dir.path().join("nested/out"));
        store.save(b"x", "a.jpg").await.unwrap();
        assert!(dir.path().join("nested/out/a.jpg").exists());
    }

    #[tokio::test]
    async fn memory_store_records_saves() {
        let store = MemoryFileStore::new();
        let url = store.save(b"abc", "f.jpg").await.unwrap();
        assert_eq!(url, "memory://f.jpg");
        assert_eq!(store.saved(), vec![("f.jpg".to_string(), b"abc".to_vec())]);
    }
}
