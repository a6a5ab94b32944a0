//! HTTP API Client
//!
//! `gloo-net` implementation of the core [`Backend`] transport.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;
use wellcheck::{Backend, ClientError, JsonResponse};

/// Local storage key for an API origin override
pub const API_URL_KEY: &str = "wellcheck_api_url";

/// Used when neither an override nor the page origin is available
pub const FALLBACK_API_BASE: &str = "http://localhost:8000";

/// Get the API origin from local storage, else the page's own origin
pub fn get_api_base() -> String {
    let window = web_sys::window();

    let stored = window
        .as_ref()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());

    let url = stored
        .or_else(|| window.and_then(|w| w.location().origin().ok()))
        .unwrap_or_else(|| FALLBACK_API_BASE.to_string());

    normalize_base(&url)
}

/// Store an API origin override; an empty value clears it
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let url = normalize_base(url);
            let _ = if url.is_empty() {
                storage.remove_item(API_URL_KEY)
            } else {
                storage.set_item(API_URL_KEY, &url)
            };
        }
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Browser transport to the wellness backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: String,
}

impl HttpBackend {
    /// Transport for the currently configured origin
    pub fn new() -> Self {
        Self {
            base: get_api_base(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

async fn read(response: Response) -> Result<JsonResponse, ClientError> {
    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !ok {
        return Err(ClientError::from_error_body(status, &text));
    }

    let body: Value =
        serde_json::from_str(&text).map_err(|_| ClientError::InvalidResponse { status })?;
    Ok(JsonResponse::new(status, body))
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn get_json(&self, path: &str) -> Result<JsonResponse, ClientError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<JsonResponse, ClientError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ClientError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read(response).await
    }
}
