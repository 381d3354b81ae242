//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, transport and decoding
//! - Categorization of `reqwest` failures that never produced a response

mod categorization;
mod types;

// Re-export public API
pub use types::{DecodeError, FailureKind, InitializationError, TransportError};
