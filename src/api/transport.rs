//! The transport seam between the dispatcher and an HTTP client.

use std::future::Future;
use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::{InitializationError, TransportError};
use crate::initialization::init_client;

use super::descriptor::RequestDescriptor;

/// A response as seen by the dispatcher: status plus raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Undecoded response body
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP request per call.
///
/// `Ok` means a response arrived, whatever its status. `Err` means no response
/// was produced at all.
pub trait Transport {
    /// Sends the request described by `descriptor`.
    fn send(
        &self,
        descriptor: &RequestDescriptor,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Arc<reqwest::Client>,
}

impl ReqwestTransport {
    /// Wraps an existing client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Validates `config` and builds a client from it.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ConfigError` for an invalid config and
    /// `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        config.validate()?;
        Ok(Self::new(init_client(config)?))
    }
}

impl Transport for ReqwestTransport {
    async fn send(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(descriptor.method.clone(), descriptor.url.as_str());
        for (name, value) in &descriptor.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !descriptor.query.is_empty() {
            builder = builder.query(&descriptor.query);
        }
        if let Some(body) = &descriptor.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
