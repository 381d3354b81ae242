//! Application configuration and constants.
//!
//! This module provides:
//! - Constants for the dispatcher fallbacks and HTTP client defaults
//! - Configuration types and validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};
