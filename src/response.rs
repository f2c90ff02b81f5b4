//! Uniform result type for API operations.
//!
//! Every operation resolves to an [`ApiResponse`]: the HTTP status plus
//! the parsed JSON body (or `None` for no-content responses). Okta error
//! documents ride along in `body` rather than becoming Rust errors, so
//! callers discriminate by status or by the `errorCode` field, whichever
//! fits their call site.

use reqwest::StatusCode;
use serde_json::Value;

/// Status and parsed body of a single API round trip.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Option<Value>,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// HTTP status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// True for any 2xx status, including no-content responses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The parsed JSON document, if the response carried one.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Consume the response, yielding the parsed document.
    pub fn into_body(self) -> Option<Value> {
        self.body
    }

    /// Okta error code (`errorCode`) when the body is an error document.
    pub fn error_code(&self) -> Option<&str> {
        self.field_str("errorCode")
    }

    /// Human-readable error summary (`errorSummary`) when present.
    pub fn error_summary(&self) -> Option<&str> {
        self.field_str("errorSummary")
    }

    fn field_str(&self, key: &str) -> Option<&str> {
        self.body.as_ref()?.get(key)?.as_str()
    }
}
