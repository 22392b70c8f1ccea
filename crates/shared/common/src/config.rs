//! Shared configuration structures.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Default exercise listing endpoint
pub const DEFAULT_EXERCISE_API_URL: &str = "https://exercisedb.p.rapidapi.com/exercises";

/// Default host identifier sent with every listing request
pub const DEFAULT_EXERCISE_API_HOST: &str = "exercisedb.p.rapidapi.com";

/// Default listing request timeout in seconds
pub const DEFAULT_EXERCISE_API_TIMEOUT_SECS: u64 = 30;

/// Load variables from a `.env` file if one exists.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Credential store configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the store's files (platform data dir when unset)
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("FITNESS_GATE_DATA_DIR")
                .ok()
                .filter(|d| !d.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Resolve the data directory, falling back to the platform default.
    pub fn resolve_data_dir(&self) -> AppResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        directories::ProjectDirs::from("com", "fitness-gate", "fitness-gate")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| AppError::config("Could not determine data directory"))
    }
}

/// Exercise listing API configuration.
#[derive(Clone, Deserialize, Serialize)]
pub struct ExerciseApiConfig {
    /// Listing endpoint URL
    pub url: String,
    /// API key sent as `X-RapidAPI-Key`
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Host identifier sent as `X-RapidAPI-Host`
    pub api_host: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ExerciseApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExerciseApiConfig")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("api_host", &self.api_host)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ExerciseApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: env::var("EXERCISE_API_URL")
                .unwrap_or_else(|_| DEFAULT_EXERCISE_API_URL.to_string()),
            api_key: env::var("EXERCISE_API_KEY").ok().filter(|k| !k.is_empty()),
            api_host: env::var("EXERCISE_API_HOST")
                .unwrap_or_else(|_| DEFAULT_EXERCISE_API_HOST.to_string()),
            timeout_secs: env::var("EXERCISE_API_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_EXERCISE_API_TIMEOUT_SECS),
        }
    }

    /// Get the API key, failing when none is configured.
    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::config("EXERCISE_API_KEY is not set"))
    }
}

impl Default for ExerciseApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_EXERCISE_API_URL.to_string(),
            api_key: None,
            api_host: DEFAULT_EXERCISE_API_HOST.to_string(),
            timeout_secs: DEFAULT_EXERCISE_API_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = StorageConfig {
            data_dir: Some(PathBuf::from("/tmp/fitness-gate-test")),
        };
        assert_eq!(
            config.resolve_data_dir().unwrap(),
            PathBuf::from("/tmp/fitness-gate-test")
        );
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let config = ExerciseApiConfig::default();
        assert!(matches!(config.require_api_key(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ExerciseApiConfig {
            api_key: Some("super-secret-key".into()),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("super-secret-key"));
    }
}
