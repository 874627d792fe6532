use crate::error;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use user_service::config::ApiConfig;
use user_service::{ApiResult, BioJob, User, UserApi, UserDraft, UserId};

/// HTTP client for the backend's `/users` resource
#[derive(Clone, Debug)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Client without a request timeout
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::build(base_url.into(), None)
    }

    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        Self::build(
            config.base_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(base_url: String, timeout: Option<Duration>) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(error::transport)?;
        let base_url = base_url.trim_end_matches('/').to_string();

        tracing::debug!(%base_url, "created REST client");

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn user_url(&self, id: UserId) -> String {
        self.build_url(&format!("users/{}", id))
    }

    /// Send a request and decode a JSON body from any 2xx response
    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        id: Option<UserId>,
    ) -> ApiResult<T> {
        let response = request.send().await.map_err(error::transport)?;
        let status = response.status();
        let body = response.text().await.map_err(error::transport)?;

        if !status.is_success() {
            return Err(error::from_status(status, &body, id));
        }
        serde_json::from_str(&body).map_err(error::decode)
    }

    /// Send a request whose success response carries nothing we need
    async fn execute_no_content(&self, request: RequestBuilder, id: Option<UserId>) -> ApiResult<()> {
        let response = request.send().await.map_err(error::transport)?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(error::from_status(status, &body, id))
    }
}

#[async_trait]
impl UserApi for RestClient {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        let request = self.client.get(self.build_url("users"));
        self.execute_json(request, None).await
    }

    async fn get_user(&self, id: UserId) -> ApiResult<User> {
        let request = self.client.get(self.user_url(id));
        self.execute_json(request, Some(id)).await
    }

    async fn create_user(&self, draft: &UserDraft) -> ApiResult<User> {
        let request = self.client.post(self.build_url("users")).json(draft);
        self.execute_json(request, None).await
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> ApiResult<User> {
        let request = self.client.put(self.user_url(id)).json(draft);
        self.execute_json(request, Some(id)).await
    }

    async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        let request = self.client.delete(self.user_url(id));
        self.execute_no_content(request, Some(id)).await
    }

    async fn request_bio(&self, id: UserId) -> ApiResult<BioJob> {
        let request = self.client.post(format!("{}/bio", self.user_url(id)));
        self.execute_json(request, Some(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = RestClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.build_url("/users"), "http://localhost:8080/users");
        assert_eq!(client.user_url(12), "http://localhost:8080/users/12");
    }

    #[test]
    fn test_from_config() {
        let config = ApiConfig {
            base_url: "http://api.internal:9000".to_string(),
            timeout_secs: Some(3),
        };
        let client = RestClient::from_config(&config).unwrap();
        assert_eq!(client.build_url("users"), "http://api.internal:9000/users");
    }
}
