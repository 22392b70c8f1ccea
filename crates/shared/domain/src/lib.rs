//! Domain layer - Core entities, validation rules and flow errors.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Storage, HTTP and presentation live in the service and app crates.

pub mod constants;
pub mod email;
pub mod error;
pub mod exercise;
pub mod user;

pub use constants::*;
pub use email::is_valid_email;
pub use error::{LoginError, RegistrationError};
pub use exercise::{Exercise, ExerciseCard};
pub use user::{LoginForm, RegisterForm, SessionHandoff, UserRecord};
