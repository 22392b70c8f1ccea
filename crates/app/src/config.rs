//! Application configuration.

use auth_service_lib::config::AuthServiceConfig;
use common::ExerciseApiConfig;

/// Configuration for every service the app wires together.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Credential store and registration rules
    pub auth: AuthServiceConfig,
    /// Exercise listing API
    pub exercise_api: ExerciseApiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env`).
    pub fn from_env() -> Self {
        common::load_dotenv();

        Self {
            auth: AuthServiceConfig::from_env(),
            exercise_api: ExerciseApiConfig::from_env(),
        }
    }
}
