//! Application operations.
//!
//! CRUD plus lifecycle activation and the app/group assignment
//! sub-resource, whose paths live under `/api/v1/apps` even though the
//! assignments relate groups.

use serde_json::Value;

use crate::client::Transport;
use crate::error::Result;
use crate::paths::APP_API_BASE_PATH;
use crate::response::ApiResponse;

/// Handler for `/api/v1/apps`.
#[derive(Clone, Debug)]
pub struct Apps {
    transport: Transport,
}

impl Apps {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List every application in the org.
    pub async fn list(&self) -> Result<ApiResponse> {
        self.transport.get(APP_API_BASE_PATH).await
    }

    /// Fetch a single application by id.
    pub async fn get(&self, app_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/{}", APP_API_BASE_PATH, app_id))
            .await
    }

    /// Create an application from a full application document
    /// (`name`, `label`, `signOnMode`, `settings`, ...).
    pub async fn create(&self, app: &Value) -> Result<ApiResponse> {
        self.transport.post(APP_API_BASE_PATH, Some(app)).await
    }

    /// Replace an application document. Omitted fields are removed from
    /// the application on update; pass the complete document.
    pub async fn update(&self, app_id: &str, app: &Value) -> Result<ApiResponse> {
        self.transport
            .put(&format!("{}/{}", APP_API_BASE_PATH, app_id), Some(app))
            .await
    }

    /// Delete an application. Only deactivated applications can be
    /// deleted; the service answers 204 on success.
    pub async fn delete(&self, app_id: &str) -> Result<ApiResponse> {
        self.transport
            .delete(&format!("{}/{}", APP_API_BASE_PATH, app_id))
            .await
    }

    /// Activate an application.
    pub async fn activate(&self, app_id: &str) -> Result<ApiResponse> {
        self.lifecycle(app_id, "activate").await
    }

    /// Deactivate an application.
    pub async fn deactivate(&self, app_id: &str) -> Result<ApiResponse> {
        self.lifecycle(app_id, "deactivate").await
    }

    /// List the users currently assigned to an application.
    pub async fn assigned_users(&self, app_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/{}/users", APP_API_BASE_PATH, app_id))
            .await
    }

    /// Fetch a single app/group assignment.
    pub async fn assigned_group(&self, app_id: &str, group_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/{}/groups/{}", APP_API_BASE_PATH, app_id, group_id))
            .await
    }

    /// Assign an application to a group, so members get it automatically.
    pub async fn assign_group(&self, app_id: &str, group_id: &str) -> Result<ApiResponse> {
        self.transport
            .put(
                &format!("{}/{}/groups/{}", APP_API_BASE_PATH, app_id, group_id),
                None,
            )
            .await
    }

    /// Remove a group assignment from an application.
    pub async fn remove_group(&self, app_id: &str, group_id: &str) -> Result<ApiResponse> {
        self.transport
            .delete(&format!("{}/{}/groups/{}", APP_API_BASE_PATH, app_id, group_id))
            .await
    }

    async fn lifecycle(&self, app_id: &str, action: &str) -> Result<ApiResponse> {
        self.transport
            .post(
                &format!("{}/{}/lifecycle/{}", APP_API_BASE_PATH, app_id, action),
                None,
            )
            .await
    }
}
