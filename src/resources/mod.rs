//! Resource method groups, one per API family.
//!
//! Each handler is a thin wrapper over the shared dispatcher: build a
//! path, optionally attach a JSON document, dispatch, and hand back the
//! uniform [`ApiResponse`](crate::ApiResponse). No handler parses
//! resource documents beyond that — their shape belongs to the service.

pub mod apps;
pub mod auth_servers;
pub mod groups;
pub mod logs;
pub mod users;

pub use apps::Apps;
pub use auth_servers::AuthServers;
pub use groups::Groups;
pub use logs::SystemLogs;
pub use users::Users;

use urlencoding::encode;

/// Compose a SCIM-style filter query: `filter=<field>+eq+"<value>"` with
/// the value percent-encoded and the quotes pre-encoded as `%22`. The
/// literal `+` is parsed as a space by the service's filter grammar.
pub(crate) fn eq_filter(field: &str, value: &str) -> String {
    format!("filter={}+eq+%22{}%22", field, encode(value))
}
