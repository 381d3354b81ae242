//! app_utils library: stateless application helpers
//!
//! This library provides a request dispatcher that unwraps `{data, message}`
//! response envelopes and normalizes every failure into a single
//! `{status, message}` shape, plus a set of small pure helpers for dates,
//! numbers, ordered maps, strings and input validation.
//!
//! # Example
//!
//! ```no_run
//! use app_utils::api::{dispatch, ApiError, RequestDescriptor, ReqwestTransport};
//! use app_utils::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = ReqwestTransport::from_config(&Config::default())?;
//! let descriptor = RequestDescriptor::get("https://api.example.com/users/1");
//!
//! dispatch::<serde_json::Value, _, _, _>(
//!     &transport,
//!     descriptor,
//!     |user| println!("user: {}", user),
//!     |error: ApiError| eprintln!("{} ({})", error.message, error.status),
//!     None,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The dispatcher requires a Tokio runtime. The helpers in [`utils`] are
//! synchronous and have no runtime requirements.

#![warn(missing_docs)]

pub mod api;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod utils;

// Re-export public API
pub use api::{dispatch, request, ApiError, Envelope, PostParams, RequestDescriptor, RequestError};
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use error_handling::{DecodeError, FailureKind, InitializationError, TransportError};
