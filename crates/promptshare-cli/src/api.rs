//! PromptShare API Client

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use promptshare::Prompt;

/// Client-side failures of a single API call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to connect to PromptShare API: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Prompt not found")]
    NotFound,

    #[error("API error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Endpoints the feed and profile controllers call back into
#[async_trait]
pub trait PromptApi: Send + Sync {
    /// GET /api/prompt
    async fn list_prompts(&self) -> Result<Vec<Prompt>, ApiError>;

    /// GET /api/users/{id}/posts
    async fn list_user_prompts(&self, user_id: Uuid) -> Result<Vec<Prompt>, ApiError>;

    /// GET /api/prompt/{id}
    async fn get_prompt(&self, id: Uuid) -> Result<Prompt, ApiError>;

    /// PATCH /api/prompt/{id}
    async fn update_prompt(&self, id: Uuid, prompt: &str, tag: &str) -> Result<Prompt, ApiError>;

    /// DELETE /api/prompt/{id}
    async fn delete_prompt(&self, id: Uuid) -> Result<(), ApiError>;
}

#[derive(Debug, Serialize)]
struct UpdatePromptRequest<'a> {
    prompt: &'a str,
    tag: &'a str,
}

/// HTTP client for the PromptShare API
pub struct PromptClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl PromptClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool, ApiError> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    /// Send once; map 404 and other failures onto `ApiError`
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let resp = self.authorized(request).send().await?;

        match resp.status() {
            status if status.is_success() => Ok(resp),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(ApiError::Status { status, body })
            }
        }
    }

    async fn json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PromptApi for PromptClient {
    async fn list_prompts(&self) -> Result<Vec<Prompt>, ApiError> {
        let resp = self.send(self.client.get(self.url("/api/prompt"))).await?;
        Self::json(resp).await
    }

    async fn list_user_prompts(&self, user_id: Uuid) -> Result<Vec<Prompt>, ApiError> {
        let url = self.url(&format!("/api/users/{}/posts", user_id));
        let resp = self.send(self.client.get(url)).await?;
        Self::json(resp).await
    }

    async fn get_prompt(&self, id: Uuid) -> Result<Prompt, ApiError> {
        let url = self.url(&format!("/api/prompt/{}", id));
        let resp = self.send(self.client.get(url)).await?;
        Self::json(resp).await
    }

    async fn update_prompt(&self, id: Uuid, prompt: &str, tag: &str) -> Result<Prompt, ApiError> {
        let url = self.url(&format!("/api/prompt/{}", id));
        let request = UpdatePromptRequest { prompt, tag };
        let resp = self.send(self.client.patch(url).json(&request)).await?;
        Self::json(resp).await
    }

    async fn delete_prompt(&self, id: Uuid) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/prompt/{}", id));
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
