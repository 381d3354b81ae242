//! Request dispatch: one call, one outcome.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::MAX_LOGGED_BODY_LENGTH;
use crate::error_handling::DecodeError;

use super::descriptor::RequestDescriptor;
use super::envelope::{ApiError, Envelope, PostParams};
use super::transport::Transport;

/// Outcome of [`request`] when no payload could be produced.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Normalized failure: remote error response or no response at all.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 2xx body that is not an envelope of the expected type.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Sends one request and unwraps the envelope payload.
///
/// If `post_body` is given it replaces the descriptor's body. The transport is
/// called exactly once; there is no retry.
///
/// # Errors
///
/// - [`RequestError::Api`] with the response status and the body's `message`
///   (or the fallback message) for a non-2xx response
/// - [`RequestError::Api`] with status 500 and the fallback message when no
///   response arrived
/// - [`RequestError::Decode`] when a 2xx body does not decode
pub async fn request<T, X>(
    transport: &X,
    descriptor: RequestDescriptor,
    post_body: Option<PostParams>,
) -> Result<T, RequestError>
where
    T: DeserializeOwned,
    X: Transport,
{
    let descriptor = match post_body {
        Some(fields) => descriptor.with_post_body(fields),
        None => descriptor,
    };

    debug!("{} {}", descriptor.method, descriptor.url);

    let response = match transport.send(&descriptor).await {
        Ok(response) => response,
        Err(e) => {
            warn!(
                "{} {} failed without a response ({})",
                descriptor.method, descriptor.url, e
            );
            return Err(ApiError::fallback().into());
        }
    };

    if !response.is_success() {
        let error = ApiError::from_failed_response(response.status, &response.body);
        warn!(
            "{} {} returned {}: {}",
            descriptor.method, descriptor.url, error.status, error.message
        );
        return Err(error.into());
    }

    let envelope: Envelope<T> = serde_json::from_slice(&response.body).map_err(|source| {
        debug!(
            "Undecodable body from {}: {}",
            descriptor.url,
            body_preview(&response.body)
        );
        DecodeError {
            status: response.status,
            source,
        }
    })?;

    Ok(envelope.data)
}

/// Callback form of [`request`].
///
/// Exactly one of `on_success` / `on_error` runs, exactly once, after the
/// transport resolves. `on_success` receives the envelope's `data`; `on_error`
/// receives the normalized [`ApiError`].
///
/// # Errors
///
/// Returns the [`DecodeError`] for a 2xx body that is not a valid envelope.
/// Neither callback runs in that case.
pub async fn dispatch<T, X, S, E>(
    transport: &X,
    descriptor: RequestDescriptor,
    on_success: S,
    on_error: E,
    post_body: Option<PostParams>,
) -> Result<(), DecodeError>
where
    T: DeserializeOwned,
    X: Transport,
    S: FnOnce(T),
    E: FnOnce(ApiError),
{
    match request(transport, descriptor, post_body).await {
        Ok(data) => on_success(data),
        Err(RequestError::Api(error)) => on_error(error),
        Err(RequestError::Decode(error)) => return Err(error),
    }
    Ok(())
}

fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let total = text.chars().count();
    if total > MAX_LOGGED_BODY_LENGTH {
        let head: String = text.chars().take(MAX_LOGGED_BODY_LENGTH).collect();
        format!("{}... (truncated, original length: {} chars)", head, total)
    } else {
        text.into_owned()
    }
}
