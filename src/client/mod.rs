//! Backend Client
//!
//! Typed access to the wellness REST API.
//!
//! ## Layers
//!
//! - [`Backend`]: minimal JSON transport (GET and POST). Implemented over
//!   `reqwest` for the CLI ([`ApiClient`]) and over `gloo-net` in the browser.
//! - [`fetch_stats`], [`fetch_list`], [`create_entity`], [`submit`]: typed
//!   operations generic over any [`Entity`], written once for all four kinds.
//!
//! Futures are not `Send`: the browser transport runs on the JS event loop.

mod error;
#[cfg(feature = "native")]
mod http;

pub use error::{ClientError, CreateError};
#[cfg(feature = "native")]
pub use http::{ApiClient, DEFAULT_BASE_URL};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::entity::{Entity, ListQuery};
use crate::forms::FormValues;
use crate::models::DashboardStats;

/// Dashboard stats endpoint
pub const STATS_PATH: &str = "/api/dashboard/stats";

/// A successful (2xx) response with a JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    pub status: u16,
    pub body: Value,
}

impl JsonResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Decode the whole body; shape mismatches are server errors
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        let status = self.status;
        serde_json::from_value(self.body).map_err(|e| {
            tracing::debug!(status, error = %e, "Unexpected response shape");
            ClientError::InvalidResponse { status }
        })
    }

    /// Decode the array stored under `key` of a list envelope
    pub fn collection<T: DeserializeOwned>(mut self, key: &str) -> Result<Vec<T>, ClientError> {
        let status = self.status;
        let items = self
            .body
            .get_mut(key)
            .map(Value::take)
            .ok_or(ClientError::InvalidResponse { status })?;
        JsonResponse::new(status, items).decode()
    }
}

/// JSON transport to the wellness backend
///
/// Implementations return `Ok` only for 2xx responses carrying a JSON body.
/// Other statuses map to [`ClientError::from_error_body`]; unreadable success
/// bodies map to [`ClientError::InvalidResponse`].
#[async_trait(?Send)]
pub trait Backend {
    /// GET `path` (relative to the API origin, may carry a query string)
    async fn get_json(&self, path: &str) -> Result<JsonResponse, ClientError>;

    /// POST a JSON body to `path`
    async fn post_json(&self, path: &str, body: &Value) -> Result<JsonResponse, ClientError>;
}

/// Fetch the dashboard summary
pub async fn fetch_stats<B: Backend + ?Sized>(backend: &B) -> Result<DashboardStats, ClientError> {
    backend.get_json(STATS_PATH).await?.decode()
}

/// Fetch the full collection of one entity kind
pub async fn fetch_list<E: Entity, B: Backend + ?Sized>(
    backend: &B,
    query: &ListQuery,
) -> Result<Vec<E>, ClientError> {
    let path = query.path_for(E::KIND);
    tracing::debug!(kind = %E::KIND, %path, "Fetching list");

    backend
        .get_json(&path)
        .await?
        .collection(E::KIND.collection_key())
}

/// POST a prepared draft and decode the created record
pub async fn create_entity<E: Entity, B: Backend + ?Sized>(
    backend: &B,
    draft: &E::Draft,
) -> Result<E, ClientError> {
    let body = serde_json::to_value(draft).map_err(|e| ClientError::Request(e.to_string()))?;
    tracing::debug!(kind = %E::KIND, "Creating record");

    backend.post_json(E::KIND.path(), &body).await?.decode()
}

/// Validate a filled-in form and, if it passes, create the record
///
/// No request is sent when validation fails.
pub async fn submit<E: Entity, B: Backend + ?Sized>(
    backend: &B,
    form: &FormValues,
) -> Result<E, CreateError> {
    let draft = E::draft_from_form(form)?;
    Ok(create_entity::<E, B>(backend, &draft).await?)
}
