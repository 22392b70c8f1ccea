//! Exercise Service Library
//!
//! Fetches the exercise list from the third-party listing API and holds the
//! home screen's state for a logged-in user.

pub mod client;
pub mod service;

use std::sync::Arc;

use common::{AppResult, ExerciseApiConfig};

use crate::client::{ExerciseDbClient, ExerciseSource};

/// Build the listing client from configuration.
pub fn build_exercise_source(config: ExerciseApiConfig) -> AppResult<Arc<dyn ExerciseSource>> {
    Ok(Arc::new(ExerciseDbClient::new(config)?))
}
