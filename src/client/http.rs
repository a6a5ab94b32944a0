//! reqwest transport

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use super::{Backend, ClientError, JsonResponse};

/// Default backend origin
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client for the wellness REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given origin (trailing slash ignored)
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!("wellcheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(response: Response) -> Result<JsonResponse, ClientError> {
        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Request failed");
            return Err(ClientError::from_error_body(status.as_u16(), &text));
        }

        let body: Value = serde_json::from_str(&text).map_err(|_| ClientError::InvalidResponse {
            status: status.as_u16(),
        })?;

        Ok(JsonResponse::new(status.as_u16(), body))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ClientError {
    if e.is_builder() {
        ClientError::Request(e.to_string())
    } else {
        ClientError::Network(e.to_string())
    }
}

#[async_trait(?Send)]
impl Backend for ApiClient {
    async fn get_json(&self, path: &str) -> Result<JsonResponse, ClientError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        Self::read(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<JsonResponse, ClientError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        Self::read(response).await
    }
}
