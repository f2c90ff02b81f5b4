//! Group operations.
//!
//! Group CRUD, membership management, and the list of applications a
//! group's members receive automatically.

use serde_json::Value;

use crate::client::Transport;
use crate::error::Result;
use crate::paths::GROUP_API_BASE_PATH;
use crate::response::ApiResponse;

/// Handler for `/api/v1/groups`.
#[derive(Clone, Debug)]
pub struct Groups {
    transport: Transport,
}

impl Groups {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List every group in the org.
    pub async fn list(&self) -> Result<ApiResponse> {
        self.transport.get(GROUP_API_BASE_PATH).await
    }

    /// Fetch a single group by id.
    pub async fn get(&self, group_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/{}", GROUP_API_BASE_PATH, group_id))
            .await
    }

    /// Replace a group document (profile name, description, ...).
    pub async fn update(&self, group_id: &str, group: &Value) -> Result<ApiResponse> {
        self.transport
            .put(&format!("{}/{}", GROUP_API_BASE_PATH, group_id), Some(group))
            .await
    }

    /// Remove a group from the org. The service answers 204 on success.
    pub async fn delete(&self, group_id: &str) -> Result<ApiResponse> {
        self.transport
            .delete(&format!("{}/{}", GROUP_API_BASE_PATH, group_id))
            .await
    }

    /// List the users that are members of a group.
    pub async fn members(&self, group_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/{}/users", GROUP_API_BASE_PATH, group_id))
            .await
    }

    /// Add a user to a group. 204 on success.
    pub async fn add_user(&self, group_id: &str, user_id: &str) -> Result<ApiResponse> {
        self.transport
            .put(
                &format!("{}/{}/users/{}", GROUP_API_BASE_PATH, group_id, user_id),
                None,
            )
            .await
    }

    /// Remove a user from a group. 204 on success.
    pub async fn remove_user(&self, group_id: &str, user_id: &str) -> Result<ApiResponse> {
        self.transport
            .delete(&format!("{}/{}/users/{}", GROUP_API_BASE_PATH, group_id, user_id))
            .await
    }

    /// List the applications assigned to a group.
    pub async fn assigned_apps(&self, group_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/{}/apps", GROUP_API_BASE_PATH, group_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::{Client, Config};

    async fn client_for(server: &MockServer) -> Client {
        Client::new(Config::new("test-token", server.uri())).expect("client")
    }

    #[tokio::test]
    async fn membership_changes_use_the_nested_users_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/groups/00g1/users/00u1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/groups/00g1/users/00u1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let added = client.groups().add_user("00g1", "00u1").await.unwrap();
        assert_eq!(added.status().as_u16(), 204);
        let removed = client.groups().remove_user("00g1", "00u1").await.unwrap();
        assert!(removed.body().is_none());
    }

    #[tokio::test]
    async fn members_returns_the_user_sequence() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/groups/00g1/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": "00u1"}, {"id": "00u2"}])),
            )
            .mount(&server)
            .await;

        let resp = client_for(&server).await.groups().members("00g1").await.unwrap();
        assert_eq!(resp.body().unwrap().as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_group_surfaces_the_not_found_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/groups/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errorCode": "E0000007",
                "errorSummary": "Not found: Resource not found: missing (UserGroup)"
            })))
            .mount(&server)
            .await;

        let resp = client_for(&server).await.groups().get("missing").await.unwrap();
        assert_eq!(resp.error_code(), Some("E0000007"));
    }

    #[tokio::test]
    async fn update_replaces_the_group_profile() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/groups/00g1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"id": "00g1", "profile": {"name": "Engineering"}}),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .await
            .groups()
            .update("00g1", &json!({"profile": {"name": "Engineering"}}))
            .await
            .unwrap();
        assert_eq!(resp.body().unwrap()["profile"]["name"], "Engineering");
    }
}
