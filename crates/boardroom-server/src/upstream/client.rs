//! Reqwest-backed upstream client.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::{
    CompletionRequest, CompletionService, CompletionUpstream, Error, Result, UpstreamResponse,
    TRACING_TARGET,
};
use crate::service::defaults;

/// Configuration for the HTTP upstream client.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Full URL of the chat-completion endpoint.
    pub endpoint: String,
    /// Timeout for one forwarded call.
    pub timeout: Duration,
    /// User agent advertised to the provider.
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::UPSTREAM_ENDPOINT.to_string(),
            timeout: Duration::from_secs(defaults::UPSTREAM_TIMEOUT_SECS),
            user_agent: concat!("boardroom-server/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl UpstreamConfig {
    /// Validates the configured endpoint.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.endpoint)
            .map_err(|error| Error::InvalidEndpoint(format!("{}: {error}", self.endpoint)))?;
        Ok(())
    }
}

/// Inner client holding the HTTP client and configuration.
struct HttpUpstreamInner {
    http: Client,
    config: UpstreamConfig,
}

/// Upstream client forwarding completion requests over HTTPS.
#[derive(Clone)]
pub struct HttpUpstream {
    inner: Arc<HttpUpstreamInner>,
}

impl fmt::Debug for HttpUpstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpUpstream")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl HttpUpstream {
    /// Creates a new upstream client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            target: TRACING_TARGET,
            endpoint = %config.endpoint,
            timeout_ms = config.timeout.as_millis() as u64,
            "Creating upstream client"
        );

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let inner = HttpUpstreamInner { http, config };
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Creates a new upstream client with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(UpstreamConfig::default())
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &UpstreamConfig {
        &self.inner.config
    }

    /// Converts this client into a [`CompletionService`].
    pub fn into_service(self) -> CompletionService {
        CompletionService::new(self)
    }
}

#[async_trait::async_trait]
impl CompletionUpstream for HttpUpstream {
    async fn send(
        &self,
        request: &CompletionRequest,
        credential: &str,
    ) -> Result<UpstreamResponse> {
        // The workspace pins reqwest without its `json` feature; bodies are
        // serialized by hand.
        let payload = serde_json::to_vec(request)?;

        let response = self
            .inner
            .http
            .post(&self.inner.config.endpoint)
            .bearer_auth(credential)
            .header("Content-Type", "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(UpstreamResponse::new(status, body))
    }
}
