//! Authorization-server operations.
//!
//! The deepest resource family: servers themselves, then policies,
//! policy rules, scopes, claims, signing keys, client resources, and
//! refresh tokens nested underneath. Each level only adds path segments;
//! the call shapes stay the same five (list, get, create, update,
//! delete) plus the occasional lifecycle action.

use serde_json::{json, Value};

use crate::client::Transport;
use crate::error::Result;
use crate::paths::AUTH_SERVER_API_BASE_PATH;
use crate::response::ApiResponse;

/// Handler for `/api/v1/authorizationServers`.
#[derive(Clone, Debug)]
pub struct AuthServers {
    transport: Transport,
}

impl AuthServers {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    fn base(auth_server_id: &str) -> String {
        format!("{}/{}", AUTH_SERVER_API_BASE_PATH, auth_server_id)
    }

    // ----- servers -----

    /// List every authorization server in the org.
    pub async fn list(&self) -> Result<ApiResponse> {
        self.transport.get(AUTH_SERVER_API_BASE_PATH).await
    }

    /// Fetch a single authorization server by id.
    pub async fn get(&self, auth_server_id: &str) -> Result<ApiResponse> {
        self.transport.get(&Self::base(auth_server_id)).await
    }

    /// Create an authorization server.
    pub async fn create(&self, auth_server: &Value) -> Result<ApiResponse> {
        self.transport
            .post(AUTH_SERVER_API_BASE_PATH, Some(auth_server))
            .await
    }

    /// Replace an authorization server document.
    pub async fn update(&self, auth_server_id: &str, auth_server: &Value) -> Result<ApiResponse> {
        self.transport
            .put(&Self::base(auth_server_id), Some(auth_server))
            .await
    }

    /// Delete an authorization server. 204 on success.
    pub async fn delete(&self, auth_server_id: &str) -> Result<ApiResponse> {
        self.transport.delete(&Self::base(auth_server_id)).await
    }

    /// Activate an authorization server. 204 on success.
    pub async fn activate(&self, auth_server_id: &str) -> Result<ApiResponse> {
        self.transport
            .post(&format!("{}/lifecycle/activate", Self::base(auth_server_id)), None)
            .await
    }

    /// Deactivate an authorization server. 204 on success.
    pub async fn deactivate(&self, auth_server_id: &str) -> Result<ApiResponse> {
        self.transport
            .post(&format!("{}/lifecycle/deactivate", Self::base(auth_server_id)), None)
            .await
    }

    // ----- policies -----

    /// List the policies attached to an authorization server.
    pub async fn policies(&self, auth_server_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/policies", Self::base(auth_server_id)))
            .await
    }

    /// Fetch a single policy by id.
    pub async fn policy(&self, auth_server_id: &str, policy_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/policies/{}", Self::base(auth_server_id), policy_id))
            .await
    }

    /// Create a policy on an authorization server.
    pub async fn create_policy(&self, auth_server_id: &str, policy: &Value) -> Result<ApiResponse> {
        self.transport
            .post(&format!("{}/policies", Self::base(auth_server_id)), Some(policy))
            .await
    }

    /// Replace a policy document.
    pub async fn update_policy(
        &self,
        auth_server_id: &str,
        policy_id: &str,
        policy: &Value,
    ) -> Result<ApiResponse> {
        self.transport
            .put(
                &format!("{}/policies/{}", Self::base(auth_server_id), policy_id),
                Some(policy),
            )
            .await
    }

    /// Delete a policy. 204 on success.
    pub async fn delete_policy(&self, auth_server_id: &str, policy_id: &str) -> Result<ApiResponse> {
        self.transport
            .delete(&format!("{}/policies/{}", Self::base(auth_server_id), policy_id))
            .await
    }

    // ----- policy rules -----

    /// List the rules of a policy.
    pub async fn rules(&self, auth_server_id: &str, policy_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!(
                "{}/policies/{}/rules",
                Self::base(auth_server_id),
                policy_id
            ))
            .await
    }

    /// Fetch a single policy rule by id.
    pub async fn rule(
        &self,
        auth_server_id: &str,
        policy_id: &str,
        rule_id: &str,
    ) -> Result<ApiResponse> {
        self.transport
            .get(&format!(
                "{}/policies/{}/rules/{}",
                Self::base(auth_server_id),
                policy_id,
                rule_id
            ))
            .await
    }

    /// Create a rule on a policy.
    pub async fn create_rule(
        &self,
        auth_server_id: &str,
        policy_id: &str,
        rule: &Value,
    ) -> Result<ApiResponse> {
        self.transport
            .post(
                &format!("{}/policies/{}/rules", Self::base(auth_server_id), policy_id),
                Some(rule),
            )
            .await
    }

    /// Replace a policy rule document.
    pub async fn update_rule(
        &self,
        auth_server_id: &str,
        policy_id: &str,
        rule_id: &str,
        rule: &Value,
    ) -> Result<ApiResponse> {
        self.transport
            .put(
                &format!(
                    "{}/policies/{}/rules/{}",
                    Self::base(auth_server_id),
                    policy_id,
                    rule_id
                ),
                Some(rule),
            )
            .await
    }

    /// Delete a policy rule. 204 on success.
    pub async fn delete_rule(
        &self,
        auth_server_id: &str,
        policy_id: &str,
        rule_id: &str,
    ) -> Result<ApiResponse> {
        self.transport
            .delete(&format!(
                "{}/policies/{}/rules/{}",
                Self::base(auth_server_id),
                policy_id,
                rule_id
            ))
            .await
    }

    // ----- scopes -----

    /// List the scopes defined on an authorization server.
    pub async fn scopes(&self, auth_server_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/scopes", Self::base(auth_server_id)))
            .await
    }

    /// Fetch a single scope by id.
    pub async fn scope(&self, auth_server_id: &str, scope_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/scopes/{}", Self::base(auth_server_id), scope_id))
            .await
    }

    /// Create a scope.
    pub async fn create_scope(&self, auth_server_id: &str, scope: &Value) -> Result<ApiResponse> {
        self.transport
            .post(&format!("{}/scopes", Self::base(auth_server_id)), Some(scope))
            .await
    }

    /// Replace a scope document.
    pub async fn update_scope(
        &self,
        auth_server_id: &str,
        scope_id: &str,
        scope: &Value,
    ) -> Result<ApiResponse> {
        self.transport
            .put(
                &format!("{}/scopes/{}", Self::base(auth_server_id), scope_id),
                Some(scope),
            )
            .await
    }

    /// Delete a scope. 204 on success.
    pub async fn delete_scope(&self, auth_server_id: &str, scope_id: &str) -> Result<ApiResponse> {
        self.transport
            .delete(&format!("{}/scopes/{}", Self::base(auth_server_id), scope_id))
            .await
    }

    // ----- claims -----

    /// List the claims defined on an authorization server.
    pub async fn claims(&self, auth_server_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/claims", Self::base(auth_server_id)))
            .await
    }

    /// Fetch a single claim by id.
    pub async fn claim(&self, auth_server_id: &str, claim_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/claims/{}", Self::base(auth_server_id), claim_id))
            .await
    }

    /// Create a claim.
    pub async fn create_claim(&self, auth_server_id: &str, claim: &Value) -> Result<ApiResponse> {
        self.transport
            .post(&format!("{}/claims", Self::base(auth_server_id)), Some(claim))
            .await
    }

    /// Replace a claim document.
    pub async fn update_claim(
        &self,
        auth_server_id: &str,
        claim_id: &str,
        claim: &Value,
    ) -> Result<ApiResponse> {
        self.transport
            .put(
                &format!("{}/claims/{}", Self::base(auth_server_id), claim_id),
                Some(claim),
            )
            .await
    }

    /// Delete a claim. 204 on success.
    pub async fn delete_claim(&self, auth_server_id: &str, claim_id: &str) -> Result<ApiResponse> {
        self.transport
            .delete(&format!("{}/claims/{}", Self::base(auth_server_id), claim_id))
            .await
    }

    // ----- signing keys -----

    /// List the signing keys of an authorization server.
    pub async fn keys(&self, auth_server_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/credentials/keys", Self::base(auth_server_id)))
            .await
    }

    /// Rotate the signing keys. The service expects the key use to be
    /// named in the body; only `sig` keys can be rotated today.
    pub async fn rotate_keys(&self, auth_server_id: &str) -> Result<ApiResponse> {
        self.transport
            .post(
                &format!(
                    "{}/credentials/lifecycle/keyRotate",
                    Self::base(auth_server_id)
                ),
                Some(&json!({"use": "sig"})),
            )
            .await
    }

    // ----- client resources and refresh tokens -----

    /// List the client resources the authorization server has issued
    /// tokens for.
    pub async fn client_resources(&self, auth_server_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/clients", Self::base(auth_server_id)))
            .await
    }

    /// List the refresh tokens issued to a client.
    pub async fn refresh_tokens(&self, auth_server_id: &str, client_id: &str) -> Result<ApiResponse> {
        self.transport
            .get(&format!("{}/clients/{}/tokens", Self::base(auth_server_id), client_id))
            .await
    }

    /// Fetch a single refresh token issued to a client.
    pub async fn refresh_token(
        &self,
        auth_server_id: &str,
        client_id: &str,
        token_id: &str,
    ) -> Result<ApiResponse> {
        self.transport
            .get(&format!(
                "{}/clients/{}/tokens/{}",
                Self::base(auth_server_id),
                client_id,
                token_id
            ))
            .await
    }

    /// Revoke every refresh token issued to a client. 204 on success.
    pub async fn revoke_refresh_tokens(
        &self,
        auth_server_id: &str,
        client_id: &str,
    ) -> Result<ApiResponse> {
        self.transport
            .delete(&format!(
                "{}/clients/{}/tokens",
                Self::base(auth_server_id),
                client_id
            ))
            .await
    }

    /// Revoke a single refresh token. 204 on success.
    pub async fn revoke_refresh_token(
        &self,
        auth_server_id: &str,
        client_id: &str,
        token_id: &str,
    ) -> Result<ApiResponse> {
        self.transport
            .delete(&format!(
                "{}/clients/{}/tokens/{}",
                Self::base(auth_server_id),
                client_id,
                token_id
            ))
            .await
    }
}
