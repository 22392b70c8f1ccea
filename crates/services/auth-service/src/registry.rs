//! Username uniqueness check.

use domain::DEFAULT_RESERVED_USERNAMES;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Answers whether a username is already taken.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UsernameRegistry: Send + Sync {
    /// True if `username` cannot be registered
    fn exists(&self, username: &str) -> bool;
}

/// Fixed list of names that stand in for existing accounts.
#[derive(Debug, Clone)]
pub struct ReservedNames {
    names: Vec<String>,
}

impl ReservedNames {
    /// Create a registry over the given names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for ReservedNames {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVED_USERNAMES.iter().copied())
    }
}

impl UsernameRegistry for ReservedNames {
    fn exists(&self, username: &str) -> bool {
        self.names.iter().any(|name| name == username)
    }
}
