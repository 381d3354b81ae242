//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used by [`ReqwestTransport`](crate::api::ReqwestTransport).
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Timeout from the config
/// - reqwest's default redirect policy (up to 10 hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
