//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - HTTP client (timeout and user agent from [`Config`](crate::Config))
//! - Logger (plain or JSON output)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
