//! Configuration types.
//!
//! This module defines the enums and structs used for logging setup, HTTP
//! client configuration and command-line parsing.

use clap::ValueEnum;
use thiserror::Error;

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid `{field}`: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is expected instead
    pub message: String,
}

/// Library configuration (no CLI dependencies).
///
/// Controls logging and the HTTP client used by
/// [`ReqwestTransport`](crate::api::ReqwestTransport). The dispatcher itself
/// has no tunables.
///
/// # Examples
///
/// ```
/// use app_utils::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Config {
    /// Checks that every field holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigValidationError`] found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
