//! Authenticated GET against OPS resource endpoints.

use http::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cache::token_cache::TokenCache;
use crate::config::credentials::Credentials;
use crate::config::settings::OpsConfig;
use crate::error::{OpsError, Result};
use crate::helpers::time::{Clock, SystemClock};
use crate::sources::oauth2::OAuth2Source;

/// Query parameters, passed through untouched.
pub type Query<'a> = [(&'a str, &'a str)];

#[derive(Debug, Clone)]
pub struct OpsClient {
    client: Client,
    tokens: Arc<TokenCache>,
    base_url: String,
}

impl OpsClient {
    pub fn new(config: &OpsConfig, credentials: Credentials) -> Result<Self> {
        Self::with_clock(config, credentials, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &OpsConfig, credentials: Credentials, clock: Arc<dyn Clock>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| OpsError::Transport(format!("cannot build HTTP client: {}", e)))?;

        let source = OAuth2Source::new(config.auth_url.clone(), credentials, client.clone());
        let tokens = TokenCache::with_clock(source, clock);

        Ok(Self {
            client,
            tokens: Arc::new(tokens),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// `rest-services` prefix every tool path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &TokenCache {
        &self.tokens
    }

    /// GET `url` with the current bearer token and return the body as JSON, unmodified.
    pub async fn fetch(&self, url: &str, query: Option<&Query<'_>>) -> Result<Value> {
        let token = self.tokens.acquire().await?;

        let mut request = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(ACCEPT, "application/json");
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%url, %status, "OPS request failed");
            return Err(OpsError::Upstream { status, body });
        }

        debug!(%url, %status, bytes = body.len(), "OPS request succeeded");
        serde_json::from_str(&body)
            .map_err(|e| OpsError::Decode(format!("{} did not return JSON: {}", url, e)))
    }
}
