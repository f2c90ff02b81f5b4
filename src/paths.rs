//! Base paths for each resource family.
//!
//! Reproduced exactly as the service documents them; resource handlers
//! compose full paths from these.

pub const API_BASE_PATH: &str = "/api/v1";
pub const USER_API_BASE_PATH: &str = "/api/v1/users";
pub const APP_API_BASE_PATH: &str = "/api/v1/apps";
pub const AUTH_SERVER_API_BASE_PATH: &str = "/api/v1/authorizationServers";
pub const GROUP_API_BASE_PATH: &str = "/api/v1/groups";
pub const SYSTEM_LOG_API_BASE_PATH: &str = "/api/v1/logs";
pub const ORG_API_BASE_PATH: &str = "/api/v1/org";
