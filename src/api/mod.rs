//! Request dispatcher.
//!
//! This module provides:
//! - [`RequestDescriptor`]: method, URL, headers, query and body for one call
//! - [`Transport`]: the HTTP seam, with [`ReqwestTransport`] as the production client
//! - [`dispatch`] / [`request`]: one call, envelope unwrapping and failure normalization
//!
//! Every failure a caller sees is an [`ApiError`]:
//! - non-2xx response: its status, plus the body's `message` or the fallback message
//! - no response at all: status 500 and the fallback message

mod descriptor;
mod dispatch;
mod envelope;
mod transport;

// Re-export public API
pub use descriptor::RequestDescriptor;
pub use dispatch::{dispatch, request, RequestError};
pub use envelope::{ApiError, Envelope, PostParams};
pub use transport::{ReqwestTransport, Transport, TransportResponse};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
