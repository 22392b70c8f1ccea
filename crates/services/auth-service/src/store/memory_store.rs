//! In-process credential store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;
use domain::UserRecord;

use super::CredentialStore;

/// Credential store that lives only as long as the process.
#[derive(Default)]
pub struct MemoryCredentialStore {
    slot: RwLock<Option<UserRecord>>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a record
    pub fn with_record(record: UserRecord) -> Self {
        Self {
            slot: RwLock::new(Some(record)),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn put(&self, record: UserRecord) -> AppResult<()> {
        *self.slot.write().await = Some(record);
        Ok(())
    }

    async fn get(&self) -> AppResult<Option<UserRecord>> {
        Ok(self.slot.read().await.clone())
    }
}
