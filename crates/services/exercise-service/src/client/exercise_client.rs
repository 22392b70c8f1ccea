//! HTTP client for the exercise listing API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use common::{AppError, AppResult, ExerciseApiConfig};
use domain::Exercise;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";

/// Header carrying the API host identifier
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Source of the exercise list shown on the home screen.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExerciseSource: Send + Sync {
    /// Fetch the full exercise list
    async fn list_exercises(&self) -> AppResult<Vec<Exercise>>;
}

/// reqwest-based client for the ExerciseDB listing endpoint.
pub struct ExerciseDbClient {
    config: ExerciseApiConfig,
    http: reqwest::Client,
}

impl ExerciseDbClient {
    /// Create a new client.
    pub fn new(config: ExerciseApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }
}

#[async_trait]
impl ExerciseSource for ExerciseDbClient {
    async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        let api_key = self.config.require_api_key()?;
        debug!("Fetching exercises from {}", self.config.url);

        let response = self
            .http
            .get(&self.config.url)
            .header(API_KEY_HEADER, api_key)
            .header(API_HOST_HEADER, &self.config.api_host)
            .send()
            .await
            .map_err(|e| AppError::network(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::network(format!(
                "Listing API returned status {}",
                status
            )));
        }

        let exercises: Vec<Exercise> = response
            .json()
            .await
            .map_err(|e| AppError::network(format!("Invalid listing response: {}", e)))?;

        debug!("Fetched {} exercises", exercises.len());
        Ok(exercises)
    }
}
