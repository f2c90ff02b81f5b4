//! System-log queries.

use crate::client::Transport;
use crate::error::Result;
use crate::paths::SYSTEM_LOG_API_BASE_PATH;
use crate::resources::eq_filter;
use crate::response::ApiResponse;

/// Handler for `/api/v1/logs`.
#[derive(Clone, Debug)]
pub struct SystemLogs {
    transport: Transport,
}

impl SystemLogs {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch the log events of one event type since a point in time.
    ///
    /// `event_type` is an Okta event type (e.g. `user.session.start`);
    /// `since` is an ISO-8601 timestamp, passed through opaquely.
    pub async fn query(&self, event_type: &str, since: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!(
                "{}?{}&since={}",
                SYSTEM_LOG_API_BASE_PATH,
                eq_filter("eventType", event_type),
                urlencoding::encode(since)
            ))
            .await
    }
}
