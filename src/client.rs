//! Core client and the authenticated dispatch path.
//!
//! [`Client`] composes one handler per resource family, all sharing a
//! single [`Transport`]. Every API operation in the crate funnels through
//! [`Transport::call_with_token`], which owns header construction, body
//! serialization, and the status/body normalization into
//! [`ApiResponse`].

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::resources::{Apps, AuthServers, Groups, SystemLogs, Users};
use crate::response::ApiResponse;

/// Authorization scheme Okta uses for API tokens.
const AUTH_SCHEME: &str = "SSWS";

/// Entry point for the API. Construct once, reuse for the life of the
/// application; the underlying connection pool is shared across all
/// resource handlers.
#[derive(Debug)]
pub struct Client {
    users: Users,
    apps: Apps,
    groups: Groups,
    auth_servers: AuthServers,
    logs: SystemLogs,
}

impl Client {
    /// Build a client from explicit configuration.
    ///
    /// Fails with [`Error::Config`] when the token or base URL is empty,
    /// or when the token cannot be carried in an HTTP header. An empty
    /// token would otherwise surface only as an authorization failure on
    /// the first call.
    pub fn new(config: Config) -> Result<Self> {
        let transport = Transport::new(config)?;
        Ok(Self {
            users: Users::new(transport.clone()),
            apps: Apps::new(transport.clone()),
            groups: Groups::new(transport.clone()),
            auth_servers: AuthServers::new(transport.clone()),
            logs: SystemLogs::new(transport),
        })
    }

    /// Build a client from `OKTA_API_TOKEN` / `OKTA_BASE_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// User operations (`/api/v1/users`).
    pub fn users(&self) -> &Users {
        &self.users
    }

    /// Application operations (`/api/v1/apps`).
    pub fn apps(&self) -> &Apps {
        &self.apps
    }

    /// Group operations (`/api/v1/groups`).
    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    /// Authorization-server operations (`/api/v1/authorizationServers`),
    /// including nested policies, rules, scopes, claims, keys, and tokens.
    pub fn auth_servers(&self) -> &AuthServers {
        &self.auth_servers
    }

    /// System-log queries (`/api/v1/logs`).
    pub fn logs(&self) -> &SystemLogs {
        &self.logs
    }
}

/// Shared dispatcher every resource method calls into.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Debug)]
pub(crate) struct Transport {
    http: HttpClient,
    base_url: String,
    auth_header: HeaderValue,
}

impl Transport {
    fn new(config: Config) -> Result<Self> {
        if config.api_token.is_empty() {
            return Err(Error::Config("api_token must not be empty".into()));
        }
        if config.base_api_url.is_empty() {
            return Err(Error::Config("base_api_url must not be empty".into()));
        }

        let mut auth_header =
            HeaderValue::from_str(&format!("{} {}", AUTH_SCHEME, config.api_token)).map_err(
                |_| Error::Config("api_token contains characters not valid in a header".into()),
            )?;
        auth_header.set_sensitive(true);

        let http = HttpClient::builder().build()?;

        Ok(Self {
            http,
            base_url: config.base_api_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Perform one authenticated round trip.
    ///
    /// `path` must start with the versioned API prefix and may carry a
    /// query string. The response body is parsed as JSON unless the
    /// service signalled no content (204 or an empty body); non-2xx
    /// statuses are not an error at this layer — Okta's error document
    /// is returned like any other body.
    pub(crate) async fn call_with_token(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "sending API request");

        let mut request = self.http.request(method, &url).headers(self.headers());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(%status, %url, "received API response");

        let bytes = response.bytes().await?;
        let body = if status == StatusCode::NO_CONTENT || bytes.is_empty() {
            None
        } else {
            Some(
                serde_json::from_slice(&bytes)
                    .map_err(|e| Error::InvalidResponse(e.to_string()))?,
            )
        };

        Ok(ApiResponse::new(status, body))
    }

    pub(crate) async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.call_with_token(Method::GET, path, None).await
    }

    pub(crate) async fn post(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        self.call_with_token(Method::POST, path, body).await
    }

    pub(crate) async fn put(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        self.call_with_token(Method::PUT, path, body).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.call_with_token(Method::DELETE, path, None).await
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::AUTHORIZATION, self.auth_header.clone());
        headers
    }
}
