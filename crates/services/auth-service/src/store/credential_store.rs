//! Credential store capability.

use async_trait::async_trait;

use common::AppResult;
use domain::UserRecord;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Durable single-slot holder for the current user's login pair.
///
/// There is at most one record; `put` replaces whatever was there.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Replace the stored record. Never leaves a partial write behind.
    async fn put(&self, record: UserRecord) -> AppResult<()>;

    /// Current record, or `None` if nothing readable has been written
    async fn get(&self) -> AppResult<Option<UserRecord>>;
}
