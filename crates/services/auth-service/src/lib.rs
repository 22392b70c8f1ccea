//! Auth Service Library
//!
//! Local credential checking: a single-slot credential store, the username
//! registry, and the registration and login flows built on them.

pub mod config;
pub mod registry;
pub mod service;
pub mod store;

use std::sync::Arc;

use tracing::info;

use common::AppResult;

use crate::config::AuthServiceConfig;
use crate::registry::ReservedNames;
use crate::service::Authenticator;
use crate::store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};

/// Build an authenticator backed by the on-disk credential store.
pub fn build_authenticator(config: &AuthServiceConfig) -> AppResult<Authenticator> {
    let store = FileCredentialStore::from_config(&config.storage)?;
    info!("Using credential store at {:?}", store.path());
    Ok(with_store(config, Arc::new(store)))
}

/// Build an authenticator whose credentials vanish when the process exits.
pub fn build_ephemeral_authenticator(config: &AuthServiceConfig) -> Authenticator {
    info!("Using in-memory credential store");
    with_store(config, Arc::new(MemoryCredentialStore::new()))
}

fn with_store(config: &AuthServiceConfig, store: Arc<dyn CredentialStore>) -> Authenticator {
    let registry = ReservedNames::new(config.reserved_usernames.iter().cloned());
    Authenticator::new(store, Arc::new(registry))
}
