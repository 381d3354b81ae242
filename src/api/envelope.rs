//! Response envelope and normalized error shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::{FALLBACK_ERROR_MESSAGE, FALLBACK_ERROR_STATUS};

/// Flat mapping of POST body fields, in insertion order.
pub type PostParams = serde_json::Map<String, Value>;

/// The `{data, message}` wrapper expected around every successful reply body.
///
/// # Example
///
/// ```
/// use app_utils::Envelope;
///
/// let body = r#"{"data": {"id": 1, "name": "John Doe"}, "message": "success"}"#;
/// let envelope: Envelope<serde_json::Value> = serde_json::from_str(body).unwrap();
/// assert_eq!(envelope.data["id"], 1);
/// assert_eq!(envelope.message, "success");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Payload handed to the success callback
    pub data: T,
    /// Server-provided status message
    #[serde(default)]
    pub message: String,
}

/// The uniform `{status, message}` shape delivered on every failure path.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message} (status {status})")]
pub struct ApiError {
    /// Human-readable message, from the server when it sent one
    pub message: String,
    /// HTTP status, or 500 when no response arrived
    pub status: u16,
}

impl ApiError {
    /// Error reported when the transport produced no response at all.
    pub fn fallback() -> Self {
        Self {
            message: FALLBACK_ERROR_MESSAGE.to_string(),
            status: FALLBACK_ERROR_STATUS,
        }
    }

    /// Builds the error for a non-2xx response.
    ///
    /// The status is kept as-is. The message is the body's `message` field when
    /// the body is a JSON object and that field is truthy; otherwise the
    /// fallback message.
    pub fn from_failed_response(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| value.get("message").and_then(truthy_message))
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        Self { message, status }
    }
}

// Falsy values are null, false, 0 and ""; anything else counts as a message.
fn truthy_message(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
