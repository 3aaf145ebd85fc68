//! # nexus-client
//!
//! Typed HTTP client for the 42Nexus REST API.
//!
//! One method per endpoint, grouped by feature area:
//! - [`auth`]: current user
//! - [`projects`]: selectable projects
//! - [`resources`]: shared links and their votes
//! - [`votes`]: subject-clarification polls and staff decisions
//! - [`disputes`]: correction disputes and staff decisions
//! - [`test_cases`]: shared test cases, downloads, approval
//!
//! Creation endpoints take their fields as query parameters with an empty
//! body, which is what the backend expects. Every request carries
//! `Authorization: Bearer <token>` when the token store holds one.

pub mod auth;
pub mod disputes;
pub mod projects;
pub mod resources;
pub mod test_cases;
pub mod votes;

mod error;
mod http;

pub use error::ApiError;
pub use test_cases::Download;

use std::sync::Arc;
use std::time::Duration;

use nexus_auth::TokenStore;
use nexus_config::ApiConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::http::{check_response, read_json, with_query};

/// Reply of a mutating endpoint: an optional new id and a status message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// HTTP client for the 42Nexus API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be built (e.g. no TLS backend).
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            tokens,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub(crate) fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        with_query(format!("{}{path}", self.base_url), query)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn send_get(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(%url, "GET");
        let resp = self.authorize(self.http.get(url)).send().await?;
        check_response(resp).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let resp = self.send_get(&self.url(path, query)).await?;
        read_json(resp).await
    }

    pub(crate) async fn post_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Ack, ApiError> {
        let url = self.url(path, query);
        tracing::debug!(%url, "POST");
        let resp = self.authorize(self.http.post(&url)).send().await?;
        ack(check_response(resp).await?).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Ack, ApiError> {
        let url = self.url(path, &[]);
        tracing::debug!(%url, "DELETE");
        let resp = self.authorize(self.http.delete(&url)).send().await?;
        ack(check_response(resp).await?).await
    }
}

/// Mutation replies are informational; an empty or non-object body is fine.
async fn ack(resp: reqwest::Response) -> Result<Ack, ApiError> {
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes).unwrap_or_default())
}
