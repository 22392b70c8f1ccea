//! Authentication service - Registration and login against the credential store.
//!
//! SOLID (SRP): Validates forms and reads/writes the single user record only.
//! Navigation and presentation belong to the screens.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use domain::{
    is_valid_email, LoginError, LoginForm, RegisterForm, RegistrationError, SessionHandoff,
    UserRecord,
};

use crate::registry::UsernameRegistry;
use crate::store::CredentialStore;

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Validate a registration form and store its credentials
    async fn register(&self, form: RegisterForm) -> Result<(), RegistrationError>;

    /// Check a login form against the stored credentials
    async fn login(&self, form: LoginForm) -> Result<SessionHandoff, LoginError>;
}

/// Concrete implementation of AuthService over injected store and registry.
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    registry: Arc<dyn UsernameRegistry>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(store: Arc<dyn CredentialStore>, registry: Arc<dyn UsernameRegistry>) -> Self {
        Self { store, registry }
    }

    /// Validation checks in order; the first failure wins.
    fn validate_registration(&self, form: &RegisterForm) -> Result<(), RegistrationError> {
        if form.has_missing_fields() {
            return Err(RegistrationError::MissingFields);
        }

        if self.registry.exists(&form.username) {
            return Err(RegistrationError::UsernameTaken);
        }

        if form.password != form.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }

        if !is_valid_email(&form.email) {
            return Err(RegistrationError::InvalidEmail);
        }

        Ok(())
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, form: RegisterForm) -> Result<(), RegistrationError> {
        if let Err(e) = self.validate_registration(&form) {
            debug!("Registration rejected for {:?}: {}", form.username, e.code());
            return Err(e);
        }

        // Email is validated but not persisted
        let record = UserRecord::new(form.username, form.password);
        let username = record.username.clone();
        self.store.put(record).await.map_err(RegistrationError::from)?;

        info!("Registered user {}", username);
        Ok(())
    }

    async fn login(&self, form: LoginForm) -> Result<SessionHandoff, LoginError> {
        if form.has_missing_fields() {
            return Err(LoginError::MissingFields);
        }

        let stored = self
            .store
            .get()
            .await
            .map_err(LoginError::from)?
            .ok_or(LoginError::NoUserRegistered)?;

        if !stored.matches(&form.username, &form.password) {
            warn!("Failed login attempt for {:?}", form.username);
            return Err(LoginError::InvalidCredentials);
        }

        info!("User {} logged in", form.username);
        Ok(SessionHandoff::new(form.username))
    }
}
