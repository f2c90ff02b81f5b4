//! User operations.
//!
//! Covers CRUD, lifecycle transitions (activate, deactivate, suspend,
//! unlock), the by-login lookup, and the assigned-application filter.
//! User documents are opaque `serde_json::Value`s; at minimum a create
//! needs a `profile` object, per the service's user schema.

use serde_json::Value;
use urlencoding::encode;

use crate::client::Transport;
use crate::error::Result;
use crate::paths::{APP_API_BASE_PATH, USER_API_BASE_PATH};
use crate::resources::eq_filter;
use crate::response::ApiResponse;

/// Handler for `/api/v1/users`.
#[derive(Clone, Debug)]
pub struct Users {
    transport: Transport,
}

impl Users {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List every user in the org.
    pub async fn list(&self) -> Result<ApiResponse> {
        self.transport.get(USER_API_BASE_PATH).await
    }

    /// Fetch a single user by id.
    pub async fn get(&self, user_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/{}", USER_API_BASE_PATH, user_id))
            .await
    }

    /// Fetch a single user by login email.
    ///
    /// The login is percent-encoded before path interpolation; values
    /// like `isaac.brock@example.com` contain path-unsafe characters.
    pub async fn get_by_login(&self, login: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/{}", USER_API_BASE_PATH, encode(login)))
            .await
    }

    /// Create a user. The returned document carries the server-assigned
    /// `id`, timestamps, and `_links`.
    pub async fn create(&self, profile: &Value) -> Result<ApiResponse> {
        self.transport.post(USER_API_BASE_PATH, Some(profile)).await
    }

    /// Create a user and activate it in the same call.
    pub async fn create_and_activate(&self, profile: &Value) -> Result<ApiResponse> {
        self.transport
            .post(&format!("{}?activate=true", USER_API_BASE_PATH), Some(profile))
            .await
    }

    /// Create a user pre-assigned to the given groups. The group ids are
    /// merged into the document as `groupIds`.
    pub async fn create_in_group(&self, profile: &Value, group_ids: &[&str]) -> Result<ApiResponse> {
        let mut body = profile.clone();
        if let Some(map) = body.as_object_mut() {
            map.insert("groupIds".into(), group_ids.iter().copied().collect());
        }
        self.transport.post(USER_API_BASE_PATH, Some(&body)).await
    }

    /// Replace a user document. Any non-nullable field omitted from
    /// `profile` is cleared server-side; pass the complete document.
    pub async fn update(&self, user_id: &str, profile: &Value) -> Result<ApiResponse> {
        self.transport
            .put(&format!("{}/{}", USER_API_BASE_PATH, user_id), Some(profile))
            .await
    }

    /// Delete a user.
    pub async fn delete(&self, user_id: &str) -> Result<ApiResponse> {
        self.transport
            .delete(&format!("{}/{}", USER_API_BASE_PATH, user_id))
            .await
    }

    /// Activate a user without waiting for first login. When `send_email`
    /// is true the service mails an activation link and the response body
    /// is empty; otherwise it returns an activation token document.
    pub async fn activate(&self, user_id: &str, send_email: bool) -> Result<ApiResponse> {
        self.lifecycle_with_email(user_id, "activate", send_email).await
    }

    /// Re-activate a previously deactivated user.
    pub async fn reactivate(&self, user_id: &str, send_email: bool) -> Result<ApiResponse> {
        self.lifecycle_with_email(user_id, "reactivate", send_email).await
    }

    /// Deactivate a user.
    pub async fn deactivate(&self, user_id: &str, send_email: bool) -> Result<ApiResponse> {
        self.lifecycle_with_email(user_id, "deactivate", send_email).await
    }

    /// Suspend a user.
    pub async fn suspend(&self, user_id: &str) -> Result<ApiResponse> {
        self.lifecycle(user_id, "suspend").await
    }

    /// Return a suspended user to ACTIVE.
    pub async fn unsuspend(&self, user_id: &str) -> Result<ApiResponse> {
        self.lifecycle(user_id, "unsuspend").await
    }

    /// Unlock a LOCKED_OUT user, returning it to ACTIVE.
    pub async fn unlock(&self, user_id: &str) -> Result<ApiResponse> {
        self.lifecycle(user_id, "unlock").await
    }

    /// List the applications assigned to a user.
    pub async fn assigned_apps(&self, user_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!(
                "{}?{}",
                APP_API_BASE_PATH,
                eq_filter("user.id", user_id)
            ))
            .await
    }

    async fn lifecycle(&self, user_id: &str, action: &str) -> Result<ApiResponse> {
        self.transport
            .post(
                &format!("{}/{}/lifecycle/{}", USER_API_BASE_PATH, user_id, action),
                None,
            )
            .await
    }

    async fn lifecycle_with_email(
        &self,
        user_id: &str,
        action: &str,
        send_email: bool,
    ) -> Result<ApiResponse> {
        self.transport
            .post(
                &format!(
                    "{}/{}/lifecycle/{}?sendEmail={}",
                    USER_API_BASE_PATH, user_id, action, send_email
                ),
                None,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::{Client, Config};

    async fn client_for(server: &MockServer) -> Client {
        Client::new(Config::new("test-token", server.uri())).expect("client")
    }

    #[tokio::test]
    async fn list_returns_an_array_even_when_the_org_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let resp = client_for(&server).await.users().list().await.unwrap();
        assert!(resp.body().unwrap().as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_by_login_percent_encodes_the_path_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "00u1"})))
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .await
            .users()
            .get_by_login("isaac.brock@example.com")
            .await
            .unwrap();
        assert_eq!(resp.body().unwrap()["id"], "00u1");

        // The raw request line must carry the encoded form, not a bare `@`.
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.path(), "/api/v1/users/isaac.brock%40example.com");
    }

    #[tokio::test]
    async fn malformed_create_surfaces_the_service_error_document() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/users"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errorCode": "E0000003",
                "errorSummary": "The request body was not well-formed."
            })))
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .await
            .users()
            .create(&json!({"boop": "bap"}))
            .await
            .unwrap();
        assert_eq!(resp.error_code(), Some("E0000003"));
        assert_eq!(
            resp.error_summary(),
            Some("The request body was not well-formed.")
        );
    }

    #[tokio::test]
    async fn create_and_activate_sets_the_activate_flag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/users"))
            .and(query_param("activate", "true"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "00u1", "status": "ACTIVE"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .await
            .users()
            .create_and_activate(&json!({"profile": {"login": "a@b.com"}}))
            .await
            .unwrap();
        assert_eq!(resp.body().unwrap()["status"], "ACTIVE");
    }

    #[tokio::test]
    async fn create_in_group_merges_group_ids_into_the_document() {
        let server = MockServer::start().await;
        let expected = json!({
            "profile": {"login": "a@b.com"},
            "groupIds": ["00g1", "00g2"]
        });
        Mock::given(method("POST"))
            .and(path("/api/v1/users"))
            .and(body_json(&expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "00u1"})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .await
            .users()
            .create_in_group(&json!({"profile": {"login": "a@b.com"}}), &["00g1", "00g2"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_puts_the_full_document_at_the_user_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/users/00u1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "00u1"})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .await
            .users()
            .update("00u1", &json!({"profile": {"login": "a@b.com"}}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn lifecycle_actions_carry_the_send_email_flag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/users/00u1/lifecycle/activate"))
            .and(query_param("sendEmail", "false"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"activationToken": "XE6wE17zmphl3KqAPFxO"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .await
            .users()
            .activate("00u1", false)
            .await
            .unwrap();
        assert_eq!(
            resp.body().unwrap()["activationToken"],
            "XE6wE17zmphl3KqAPFxO"
        );
    }

    #[tokio::test]
    async fn suspend_hits_the_bare_lifecycle_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/users/00u1/lifecycle/suspend"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).await.users().suspend("00u1").await.unwrap();
    }

    #[tokio::test]
    async fn assigned_apps_filters_the_app_collection_by_user_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/apps"))
            .and(query_param("filter", "user.id eq \"00u1\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "0oa1"}])))
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .await
            .users()
            .assigned_apps("00u1")
            .await
            .unwrap();
        assert_eq!(resp.body().unwrap()[0]["id"], "0oa1");
    }
}
