//! Domain-level errors.
//!
//! Each flow has its own error type. The display text of every variant is the
//! message shown to the user; storage failures keep their detail separately so
//! it can be logged without being shown.

use thiserror::Error;

/// Reasons a registration attempt is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// At least one form field is empty
    #[error("All fields are required")]
    MissingFields,

    /// Username is reserved or already registered
    #[error("Username already exists")]
    UsernameTaken,

    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Email does not match the accepted pattern
    #[error("Please enter a valid email")]
    InvalidEmail,

    /// The credential store could not be written
    #[error("An error occurred during registration")]
    Storage(String),
}

impl RegistrationError {
    /// Stable identifier for logs and tests
    pub fn code(&self) -> &'static str {
        match self {
            RegistrationError::MissingFields => "MISSING_FIELDS",
            RegistrationError::UsernameTaken => "USERNAME_TAKEN",
            RegistrationError::PasswordMismatch => "PASSWORD_MISMATCH",
            RegistrationError::InvalidEmail => "INVALID_EMAIL",
            RegistrationError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Create a storage error
    pub fn storage(detail: impl Into<String>) -> Self {
        RegistrationError::Storage(detail.into())
    }
}

/// Reasons a login attempt is rejected.
///
/// `InvalidCredentials` never says which of the two fields was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Username or password is empty
    #[error("All fields are required")]
    MissingFields,

    /// Nothing has been registered on this device yet
    #[error("No user found. Please register first.")]
    NoUserRegistered,

    /// Username or password does not match the stored record
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The credential store could not be read
    #[error("An error occurred during login")]
    Storage(String),
}

impl LoginError {
    /// Stable identifier for logs and tests
    pub fn code(&self) -> &'static str {
        match self {
            LoginError::MissingFields => "MISSING_FIELDS",
            LoginError::NoUserRegistered => "NO_USER_REGISTERED",
            LoginError::InvalidCredentials => "INVALID_CREDENTIALS",
            LoginError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Create a storage error
    pub fn storage(detail: impl Into<String>) -> Self {
        LoginError::Storage(detail.into())
    }
}
