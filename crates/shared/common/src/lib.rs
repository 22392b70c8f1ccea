//! Common utilities shared across all services.
//!
//! This crate provides:
//! - Unified error handling with user-facing messages
//! - Configuration structures
//! - Tracing bootstrap

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
