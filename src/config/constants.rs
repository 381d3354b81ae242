//! Configuration constants.
//!
//! This module defines the constants shared by the request dispatcher, the
//! HTTP client setup and logging.

/// Message delivered to the error callback when the remote side gave no usable message.
///
/// Used both for failed responses whose body lacks a `message` field and for
/// transport failures where no response arrived at all.
pub const FALLBACK_ERROR_MESSAGE: &str = "A communication error occurred.";

/// Status reported for failures that never produced an HTTP response
/// (connection refused, DNS failure, timeout, malformed request).
pub const FALLBACK_ERROR_STATUS: u16 = 500;

/// Default per-request timeout in seconds for the shared HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent string for outgoing requests.
pub const DEFAULT_USER_AGENT: &str = concat!("app_utils/", env!("CARGO_PKG_VERSION"));

/// Maximum number of body characters included in debug logs.
/// Longer bodies are truncated with a note about the original length.
pub const MAX_LOGGED_BODY_LENGTH: usize = 512;
