//! Auth service configuration.

use std::env;

use common::StorageConfig;
use domain::DEFAULT_RESERVED_USERNAMES;

/// Auth service configuration.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Usernames that registration rejects as taken
    pub reserved_usernames: Vec<String>,
    /// Credential store location
    pub storage: StorageConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            reserved_usernames: env::var("RESERVED_USERNAMES")
                .map(|names| parse_names(&names))
                .unwrap_or_else(|_| default_reserved()),
            storage: StorageConfig::from_env(),
        }
    }
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            reserved_usernames: default_reserved(),
            storage: StorageConfig::default(),
        }
    }
}

fn default_reserved() -> Vec<String> {
    DEFAULT_RESERVED_USERNAMES
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Split a comma-separated list, dropping blanks
fn parse_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(parse_names("a, b,,c "), vec!["a", "b", "c"]);
        assert!(parse_names(" , ").is_empty());
    }

    #[test]
    fn test_default_reserved_names() {
        let config = AuthServiceConfig::default();
        assert_eq!(config.reserved_usernames, vec!["user1", "user2", "user3"]);
    }
}
