//! User record, session handoff and the form payloads that produce them.

use serde::{Deserialize, Serialize};

/// The single persisted user: the most recently registered login pair.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl UserRecord {
    /// Create a new record
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive comparison of both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Username handed from a successful login to the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandoff {
    pub username: String,
}

impl SessionHandoff {
    /// Create a handoff for the given user
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Registration form as entered on the Register screen
#[derive(Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

impl RegisterForm {
    /// True when any of the four fields is empty
    pub fn has_missing_fields(&self) -> bool {
        self.username.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
    }
}

/// Login form as entered on the Login screen
#[derive(Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl LoginForm {
    /// Create a login form
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// True when username or password is empty
    pub fn has_missing_fields(&self) -> bool {
        self.username.is_empty() || self.password.is_empty()
    }
}
