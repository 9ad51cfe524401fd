//! HTTP implementation of [`AdminClient`] over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::AdminClient;
use crate::error::{AdminClientError, AdminClientResult};
use crate::query::{ExecuteActionsEmail, UserQuery};
use crate::representation::{
    BruteForceStatus, ComponentRepresentation, CredentialRepresentation, PasswordReset,
    RealmRepresentation, UserProfileConfig, UserRepresentation,
};

/// Default request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Admin client talking to a Keycloak server.
#[derive(Debug, Clone)]
pub struct HttpAdminClient {
    client: reqwest::Client,
    base_url: String,
    realm: String,
    token: Option<String>,
}

impl HttpAdminClient {
    /// Creates a client for `realm` on the server at `base_url`.
    pub fn new(base_url: impl Into<String>, realm: impl Into<String>) -> AdminClientResult<Self> {
        let realm = realm.into();
        if realm.is_empty() {
            return Err(AdminClientError::Config("realm is required".to_string()));
        }

        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            realm,
            token: None,
        })
    }

    /// Sets the bearer token sent with every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds an absolute URL for a path below the realm's admin root.
    fn url(&self, path: &str) -> String {
        format!(
            "{}/admin/realms/{}{}",
            self.base_url,
            urlencoding::encode(&self.realm),
            path
        )
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "admin request");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> AdminClientResult<T> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        handle_response(response).await
    }

    async fn post_empty(&self, path: &str) -> AdminClientResult<()> {
        let response = self.request(reqwest::Method::POST, path).send().await?;
        handle_empty_response(response).await
    }

    async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AdminClientResult<()> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        handle_empty_response(response).await
    }

    async fn delete(&self, path: &str) -> AdminClientResult<()> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        handle_empty_response(response).await
    }
}

fn enc(segment: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(segment)
}

#[async_trait]
impl AdminClient for HttpAdminClient {
    fn realm(&self) -> &str {
        &self.realm
    }

    async fn find_components(
        &self,
        provider_type: &str,
    ) -> AdminClientResult<Vec<ComponentRepresentation>> {
        self.get(&format!("/components?type={}", enc(provider_type)))
            .await
    }

    async fn find_realm(&self) -> AdminClientResult<RealmRepresentation> {
        self.get("").await
    }

    async fn user_profile(&self) -> AdminClientResult<UserProfileConfig> {
        self.get("/users/profile").await
    }

    async fn find_users(&self, query: &UserQuery) -> AdminClientResult<Vec<UserRepresentation>> {
        self.get(&format!("/users?{}", query.to_query_string())).await
    }

    async fn delete_user(&self, user_id: &str) -> AdminClientResult<()> {
        self.delete(&format!("/users/{}", enc(user_id))).await
    }

    async fn brute_force_status(&self, user_id: &str) -> AdminClientResult<BruteForceStatus> {
        self.get(&format!(
            "/attack-detection/brute-force/users/{}",
            enc(user_id)
        ))
        .await
    }

    async fn clear_brute_force(&self) -> AdminClientResult<()> {
        self.delete("/attack-detection/brute-force/users").await
    }

    async fn reset_password(&self, user_id: &str, reset: &PasswordReset) -> AdminClientResult<()> {
        self.put(&format!("/users/{}/reset-password", enc(user_id)), reset)
            .await
    }

    async fn execute_actions_email(
        &self,
        user_id: &str,
        params: &ExecuteActionsEmail,
    ) -> AdminClientResult<()> {
        let query = params.to_query_string();
        let mut path = format!("/users/{}/execute-actions-email", enc(user_id));
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }
        self.put(&path, &params.actions).await
    }

    async fn credentials(&self, user_id: &str) -> AdminClientResult<Vec<CredentialRepresentation>> {
        self.get(&format!("/users/{}/credentials", enc(user_id)))
            .await
    }

    async fn delete_credential(&self, user_id: &str, credential_id: &str) -> AdminClientResult<()> {
        self.delete(&format!(
            "/users/{}/credentials/{}",
            enc(user_id),
            enc(credential_id)
        ))
        .await
    }

    async fn move_credential_up(
        &self,
        user_id: &str,
        credential_id: &str,
    ) -> AdminClientResult<()> {
        self.post_empty(&format!(
            "/users/{}/credentials/{}/moveToFirst",
            enc(user_id),
            enc(credential_id)
        ))
        .await
    }

    async fn move_credential_down(
        &self,
        user_id: &str,
        credential_id: &str,
        new_previous_id: &str,
    ) -> AdminClientResult<()> {
        self.post_empty(&format!(
            "/users/{}/credentials/{}/moveAfter/{}",
            enc(user_id),
            enc(credential_id),
            enc(new_previous_id)
        ))
        .await
    }

    async fn update_credential_label(
        &self,
        user_id: &str,
        credential_id: &str,
        label: &str,
    ) -> AdminClientResult<()> {
        let path = format!(
            "/users/{}/credentials/{}/userLabel",
            enc(user_id),
            enc(credential_id)
        );
        let response = self
            .request(reqwest::Method::PUT, &path)
            .header(CONTENT_TYPE, "text/plain")
            .body(label.to_string())
            .send()
            .await?;
        handle_empty_response(response).await
    }

    async fn user_storage_credential_types(
        &self,
        user_id: &str,
    ) -> AdminClientResult<Vec<String>> {
        self.get(&format!(
            "/users/{}/configured-user-storage-credential-types",
            enc(user_id)
        ))
        .await
    }
}

/// Handles a response with a body.
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> AdminClientResult<T> {
    let status = response.status();

    if status.is_success() {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    } else {
        Err(api_error(status, response).await)
    }
}

/// Handles a response without a body.
async fn handle_empty_response(response: reqwest::Response) -> AdminClientResult<()> {
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        Err(api_error(status, response).await)
    }
}

async fn api_error(status: reqwest::StatusCode, response: reqwest::Response) -> AdminClientError {
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    tracing::debug!(status = status.as_u16(), %message, "admin request failed");
    AdminClientError::Api {
        status: status.as_u16(),
        message,
    }
}
