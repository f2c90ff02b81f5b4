//! Async client for the Okta management REST API.
//!
//! One authenticated dispatch path serves every operation: the client
//! builds a versioned path, attaches the `SSWS` token header, performs a
//! single round trip, and normalizes the outcome into an [`ApiResponse`]
//! (HTTP status plus parsed JSON body). Okta's 4xx/5xx error documents
//! are returned through the same type rather than raised, so callers
//! branch on `status()` or `error_code()` as the call site demands.
//!
//! Resource documents (users, apps, groups, authorization servers, log
//! events) are passed through as opaque `serde_json::Value`s — their
//! shape is owned by the service, and this crate never renames or
//! restructures fields.
//!
//! # Quick start
//!
//! ```no_run
//! use okta_client::{Client, Config};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> okta_client::Result<()> {
//!     let client = Client::new(Config::new(
//!         "00aBcD...",
//!         "https://dev-123456.okta.com",
//!     ))?;
//!
//!     let users = client.users().list().await?;
//!     println!("{} users", users.body().unwrap().as_array().unwrap().len());
//!
//!     let created = client
//!         .users()
//!         .create(&json!({
//!             "profile": {
//!                 "firstName": "Isaac",
//!                 "lastName": "Brock",
//!                 "email": "isaac.brock@example.com",
//!                 "login": "isaac.brock@example.com"
//!             }
//!         }))
//!         .await?;
//!
//!     if let Some(code) = created.error_code() {
//!         eprintln!("create failed: {}", code);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
pub mod paths;
pub mod resources;
mod response;

pub use client::Client;
pub use config::{Config, BASE_URL_ENV_VAR, TOKEN_ENV_VAR};
pub use error::{Error, Result};
pub use resources::{Apps, AuthServers, Groups, SystemLogs, Users};
pub use response::ApiResponse;
