//! Error type definitions.
//!
//! This module defines the errors raised while initializing the application,
//! while talking to the transport and while decoding response envelopes.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configuration did not pass validation.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigValidationError),
}

/// Categories of transport failures that produced no HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// The request could not be built (bad header, unparsable URL, ...)
    Builder,
    /// Redirect policy violated (too many hops, loop)
    Redirect,
    /// The request or connection timed out
    Timeout,
    /// TCP/TLS connection or DNS resolution failed
    Connect,
    /// Sending the request failed
    Request,
    /// Reading the response body failed midway
    Body,
    /// Decompressing or decoding the raw body failed
    Decode,
    /// Anything the categories above do not cover
    Other,
}

impl FailureKind {
    /// Short human-readable label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Builder => "request builder error",
            FailureKind::Redirect => "redirect error",
            FailureKind::Timeout => "timeout",
            FailureKind::Connect => "connect error",
            FailureKind::Request => "request error",
            FailureKind::Body => "body error",
            FailureKind::Decode => "decode error",
            FailureKind::Other => "other transport error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transport failure with no response at all.
///
/// The dispatcher never shows this to callers; it is collapsed into the
/// fallback `ApiError` after being logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct TransportError {
    /// Failure category
    pub kind: FailureKind,
    /// Underlying error text
    pub message: String,
}

impl TransportError {
    /// Creates a transport error of the given category.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ReqwestError> for TransportError {
    fn from(error: ReqwestError) -> Self {
        let kind = super::categorization::categorize_reqwest_error(&error);
        Self::new(kind, error.to_string())
    }
}

/// A 2xx response whose body is not a `{data, message}` envelope of the
/// expected type.
#[derive(Error, Debug)]
#[error("failed to decode response envelope (status {status}): {source}")]
pub struct DecodeError {
    /// Status of the response that could not be decoded
    pub status: u16,
    /// The JSON decoding failure
    #[source]
    pub source: serde_json::Error,
}
