//! Transport failure categorization.

use super::types::FailureKind;

/// Categorizes a `reqwest::Error` into a [`FailureKind`].
///
/// Only called for errors raised before a response was available, so status
/// codes never take part in the decision.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.is_builder() {
        FailureKind::Builder
    } else if error.is_redirect() {
        FailureKind::Redirect
    } else if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_request() {
        FailureKind::Request
    } else if error.is_body() {
        FailureKind::Body
    } else if error.is_decode() {
        FailureKind::Decode
    } else {
        FailureKind::Other
    }
}
