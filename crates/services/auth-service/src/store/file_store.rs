//! File-backed credential store.
//!
//! Each key is one JSON file inside the data directory. Writes land in a
//! sibling temp file first and are renamed into place, so a reader sees either
//! the old record or the new one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use common::{AppError, AppResult, StorageConfig};
use domain::{UserRecord, USER_RECORD_KEY};

use super::CredentialStore;

/// Credential store persisted as `<data_dir>/<key>.json`.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store for the user record inside `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_key(data_dir, USER_RECORD_KEY)
    }

    /// Create a store for an arbitrary key inside `data_dir`.
    pub fn with_key(data_dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", key)),
        }
    }

    /// Create a store from configuration, resolving the platform data dir.
    pub fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let dir = config.resolve_data_dir()?;
        debug!("Credential store directory: {:?}", dir);
        Ok(Self::new(dir))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn put(&self, record: UserRecord) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!("Failed to create data dir {:?}: {}", parent, e))
            })?;
        }

        let content = serde_json::to_vec(&record)?;
        let temp = self.temp_path();

        fs::write(&temp, content)
            .await
            .map_err(|e| AppError::storage(format!("Failed to write {:?}: {}", temp, e)))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| AppError::storage(format!("Failed to replace {:?}: {}", self.path, e)))?;

        debug!("Stored user record for {}", record.username);
        Ok(())
    }

    async fn get(&self) -> AppResult<Option<UserRecord>> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read {:?}: {}",
                    self.path, e
                )))
            }
        };

        let record = serde_json::from_slice(&content).map_err(|e| {
            warn!("Unreadable user record at {:?}: {}", self.path, e);
            AppError::storage(format!("Corrupt user record at {:?}: {}", self.path, e))
        })?;

        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path());

        assert!(store.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path());

        store.put(UserRecord::new("alice", "secret")).await.unwrap();

        assert_eq!(
            store.get().await.unwrap(),
            Some(UserRecord::new("alice", "secret"))
        );
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_put_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("nested").join("data"));

        store.put(UserRecord::new("alice", "secret")).await.unwrap();

        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path());
        std::fs::write(store.path(), b"{not json").unwrap();

        assert!(matches!(store.get().await, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_unreadable_path_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be cannot be read as a file
        let store = FileCredentialStore::new(dir.path());
        std::fs::create_dir(store.path()).unwrap();

        assert!(matches!(store.get().await, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_file_holds_plain_json_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path());
        store.put(UserRecord::new("alice", "secret")).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(dir.path().join("user.json")).unwrap()).unwrap();
        assert_eq!(raw["username"], "alice");
        assert_eq!(raw["password"], "secret");
    }
}
