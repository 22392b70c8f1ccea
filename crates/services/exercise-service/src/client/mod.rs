//! Clients for external services.

mod exercise_client;

#[cfg(any(test, feature = "test-utils"))]
pub use exercise_client::MockExerciseSource;
pub use exercise_client::{ExerciseDbClient, ExerciseSource, API_HOST_HEADER, API_KEY_HEADER};
