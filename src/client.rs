//! HTTP client for SearXNG-compatible `/search` endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::{Result, SearchError, SearchResponse};

/// Default instance URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
pub const DEFAULT_USER_AGENT: &str = concat!("seax/", env!("CARGO_PKG_VERSION"));

/// Configuration for a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Instance URL, e.g. `http://localhost:4000`.
    pub base_url: String,
    /// Upper bound for the whole request, body included.
    pub timeout: Duration,
    /// User-agent string.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for the given instance URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Anything that can answer a query with a [`SearchResponse`].
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Performs a search and returns the decoded response.
    async fn search(&self, query: &str) -> Result<SearchResponse>;
}

/// Search endpoint client.
///
/// Issues exactly one GET per call; failures are returned as is, never retried.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Client {
    /// Creates a client for `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Creates a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = validate_base_url(&config.base_url)?;

        if config.timeout.is_zero() {
            return Err(SearchError::Config("timeout must be positive".into()));
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            timeout: config.timeout,
        })
    }

    /// Returns the normalized instance URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the full request URL for `query`.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?q={}&format=json",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    /// Performs a search query and returns results.
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = self.search_url(query);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!("response status: {}", status);

        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if status != StatusCode::OK {
            warn!("search endpoint returned {}", status);
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: SearchResponse = serde_json::from_str(&body)?;
        debug!("decoded {} results", decoded.len());

        Ok(decoded)
    }

    fn transport_error(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::Timeout(self.timeout)
        } else {
            SearchError::Http(err)
        }
    }
}

#[async_trait]
impl Searcher for Client {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        Client::search(self, query).await
    }
}

fn validate_base_url(raw: &str) -> Result<String> {
    let invalid = |reason: &str| SearchError::InvalidUrl(raw.to_string(), reason.to_string());

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(invalid(&format!("unsupported scheme '{scheme}'"))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not contain a query or fragment"));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
