//! Client configuration.
//!
//! Two values are required: the API token and the base origin URL of the
//! Okta org (e.g. `https://dev-123456.okta.com`). Both are opaque to this
//! crate; they can be supplied directly or picked up from the
//! `OKTA_API_TOKEN` / `OKTA_BASE_API_URL` environment variables.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Env var holding the API token.
pub const TOKEN_ENV_VAR: &str = "OKTA_API_TOKEN";

/// Env var holding the base origin URL.
pub const BASE_URL_ENV_VAR: &str = "OKTA_BASE_API_URL";

/// Connection parameters for a [`Client`](crate::Client). Immutable once
/// the client is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_token: String,
    pub base_api_url: String,
}

impl Config {
    pub fn new(api_token: impl Into<String>, base_api_url: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_api_url: base_api_url.into(),
        }
    }

    /// Read both values from the environment.
    ///
    /// ```no_run
    /// dotenvy::dotenv().ok();
    /// let config = okta_client::Config::from_env()?;
    /// # Ok::<(), okta_client::Error>(())
    /// ```
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var(TOKEN_ENV_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", TOKEN_ENV_VAR)))?;
        let base_api_url = std::env::var(BASE_URL_ENV_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", BASE_URL_ENV_VAR)))?;
        Ok(Self::new(api_token, base_api_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_from_owned_or_borrowed_strings() {
        let config = Config::new("token", String::from("https://example.okta.com"));
        assert_eq!(config.api_token, "token");
        assert_eq!(config.base_api_url, "https://example.okta.com");
    }
}
