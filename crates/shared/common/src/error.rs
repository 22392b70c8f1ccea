//! Unified error handling.
//!
//! Provides a single error type for every layer below the screens. Each
//! variant converts to an alert message that never leaks internal detail;
//! the detail goes to the log instead.

use domain::{LoginError, RegistrationError, FETCH_FAILED_MESSAGE};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Flow validation
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Login(#[from] LoginError),

    // Credential store
    #[error("Storage error: {0}")]
    Storage(String),

    // Exercise listing API
    #[error("Network error: {0}")]
    Network(String),

    // Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Registration(e) => e.code(),
            AppError::Login(e) => e.code(),
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Validation texts are already user-facing
            AppError::Registration(RegistrationError::Storage(detail)) => {
                tracing::error!("Registration storage error: {}", detail);
                self.to_string()
            }
            AppError::Login(LoginError::Storage(detail)) => {
                tracing::error!("Login storage error: {}", detail);
                self.to_string()
            }
            AppError::Registration(_) | AppError::Login(_) => self.to_string(),

            // Hide details for infrastructure errors
            AppError::Storage(detail) => {
                tracing::error!("Storage error: {}", detail);
                "A storage error occurred".to_string()
            }
            AppError::Network(detail) => {
                tracing::error!("Network error: {}", detail);
                FETCH_FAILED_MESSAGE.to_string()
            }
            AppError::Config(detail) => {
                tracing::error!("Configuration error: {}", detail);
                self.to_string()
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "An internal error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// Infrastructure Error Conversion
// =============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(format!("Serialization failed: {}", err))
    }
}

// =============================================================================
// Flow Error Conversion
// =============================================================================

impl From<AppError> for RegistrationError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Registration(e) => e,
            other => RegistrationError::storage(other.to_string()),
        }
    }
}

impl From<AppError> for LoginError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Login(e) => e,
            other => LoginError::storage(other.to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        AppError::Network(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_shows_fetch_message() {
        let err = AppError::network("connection refused");
        assert_eq!(err.code(), "NETWORK_ERROR");
        assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn test_storage_error_hides_detail() {
        let err = AppError::storage("/home/alice/.local/share: permission denied");
        assert!(!err.user_message().contains("permission denied"));
    }

    #[test]
    fn test_flow_errors_keep_their_text() {
        let err = AppError::from(LoginError::InvalidCredentials);
        assert_eq!(err.code(), "INVALID_CREDENTIALS");
        assert_eq!(err.user_message(), "Invalid credentials");

        let err = AppError::from(RegistrationError::PasswordMismatch);
        assert_eq!(err.user_message(), "Passwords do not match");
    }

    #[test]
    fn test_store_failure_becomes_flow_storage_error() {
        let err: LoginError = AppError::storage("corrupt").into();
        assert!(matches!(err, LoginError::Storage(_)));

        let err: RegistrationError = AppError::storage("read-only").into();
        assert!(matches!(err, RegistrationError::Storage(_)));
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(AppError::from(io), AppError::Storage(_)));
    }
}
