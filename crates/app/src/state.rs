//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::service::AuthService;
use common::AppResult;
use exercise_service_lib::client::ExerciseSource;

use crate::config::AppConfig;

/// Services shared across screens.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthService>,
    pub exercises: Arc<dyn ExerciseSource>,
}

impl AppState {
    /// Create new app state.
    pub fn new(auth: Arc<dyn AuthService>, exercises: Arc<dyn ExerciseSource>) -> Self {
        Self { auth, exercises }
    }

    /// Wire the real services from configuration.
    ///
    /// With `ephemeral` the credential store lives in memory only.
    pub fn from_config(config: &AppConfig, ephemeral: bool) -> AppResult<Self> {
        let auth: Arc<dyn AuthService> = if ephemeral {
            Arc::new(auth_service_lib::build_ephemeral_authenticator(&config.auth))
        } else {
            Arc::new(auth_service_lib::build_authenticator(&config.auth)?)
        };
        let exercises = exercise_service_lib::build_exercise_source(config.exercise_api.clone())?;

        Ok(Self::new(auth, exercises))
    }
}
