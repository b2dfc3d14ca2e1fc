//! Main BGPView API client implementation.

use crate::api::{AsnApi, SearchApi};
use crate::config::ClientConfig;
use async_trait::async_trait;
use asnscan_core::{AsnCandidate, AsnScanError, BgpDirectory, Ipv4Prefix, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Main BGPView API client
#[derive(Clone)]
pub struct BgpViewClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
}

impl BgpViewClient {
    /// Create a client against the public API using default settings
    pub fn new() -> Result<Self> {
        BgpViewClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> BgpViewClientBuilder {
        BgpViewClientBuilder::new()
    }

    /// Access the organization search endpoint
    #[must_use]
    pub const fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Access endpoints scoped to one autonomous system
    #[must_use]
    pub const fn asn(&self, asn: u32) -> AsnApi<'_> {
        AsnApi::new(self, asn)
    }

    /// The base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, params);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Build a URL with encoded query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);

        if !params.is_empty() {
            let query: String = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params)
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        url
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(transport_error)?;
            serde_json::from_str(&body).map_err(AsnScanError::Json)
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to an `AsnScanError`
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);

        match status {
            404 => Err(AsnScanError::NotFound { resource: message }),
            429 => {
                warn!("Rate limited by BGP API");
                Err(AsnScanError::RateLimited)
            }
            _ => Err(AsnScanError::Api {
                code: status,
                message,
            }),
        }
    }
}

#[async_trait]
impl BgpDirectory for BgpViewClient {
    async fn search_asns(&self, query: &str) -> Result<Vec<AsnCandidate>> {
        self.search().asns(query).await
    }

    async fn ipv4_prefixes(&self, asn: u32) -> Result<Vec<Ipv4Prefix>> {
        self.asn(asn).ipv4_prefixes().await
    }
}

/// Prefer the API's own error text over the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["status_message", "error"]
                .iter()
                .find_map(|key| v.get(key).and_then(|e| e.as_str()).map(String::from))
        })
        .unwrap_or_else(|| body.trim().to_string())
}

fn transport_error(err: reqwest::Error) -> AsnScanError {
    if err.is_timeout() {
        AsnScanError::Timeout(err.to_string())
    } else {
        AsnScanError::Http(err.to_string())
    }
}

/// Builder for configuring a [`BgpViewClient`]
#[derive(Debug, Default)]
pub struct BgpViewClientBuilder {
    config: ClientConfig,
}

impl BgpViewClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    #[must_use]
    pub const fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.base_url(url);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(agent);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<BgpViewClient> {
        url::Url::parse(&self.config.base_url)
            .map_err(|e| AsnScanError::InvalidUrl(format!("{}: {e}", self.config.base_url)))?;

        let http = HttpClient::builder()
            .timeout(self.config.timeout)
            .user_agent(&self.config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| AsnScanError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(BgpViewClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.config.base_url,
            }),
        })
    }
}
