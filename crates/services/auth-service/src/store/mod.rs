//! Credential storage layer.

mod credential_store;
mod file_store;
mod memory_store;

pub use credential_store::CredentialStore;
#[cfg(any(test, feature = "test-utils"))]
pub use credential_store::MockCredentialStore;
pub use file_store::FileCredentialStore;
pub use memory_store::MemoryCredentialStore;
