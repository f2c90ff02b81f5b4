//! Error types for the client.
//!
//! Only genuine failures surface here: bad configuration, transport-level
//! faults, and unparseable response bodies. A well-formed Okta error
//! document (4xx/5xx with JSON) is not an `Error` — it comes back as a
//! normal [`ApiResponse`](crate::ApiResponse) for the caller to inspect.

use thiserror::Error;

/// Convenience alias used by every public operation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unusable configuration, caught at construction time.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Transport failure (connection refused, DNS, TLS). Propagated
    /// unchanged from the underlying HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service returned a non-empty body that was not valid JSON.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}
