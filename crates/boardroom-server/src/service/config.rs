//! Proxy service configuration.

use std::time::Duration;

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::service::{Result, ServiceError};
use crate::upstream::UpstreamConfig;

/// Default values for the proxy configuration.
pub mod defaults {
    /// Upstream chat-completion endpoint.
    pub const UPSTREAM_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

    /// Model requested when the caller does not name one.
    pub const MODEL: &str = "openai/gpt-4o-mini";

    /// Sampling temperature applied when the caller omits one.
    pub const TEMPERATURE: f32 = 0.4;

    /// Output token cap applied when the caller omits one.
    pub const MAX_TOKENS: u32 = 600;

    /// Timeout for one forwarded upstream call, in seconds.
    pub const UPSTREAM_TIMEOUT_SECS: u64 = 30;
}

/// Proxy service configuration.
///
/// # Environment Variables
///
/// - `UPSTREAM_ENDPOINT` - Full URL of the chat-completion endpoint
/// - `DEFAULT_MODEL` - Model forwarded when a request does not name one
/// - `UPSTREAM_TIMEOUT` - Forwarded-call timeout in seconds (1-300)
/// - `BOARDROOM_UPSTREAM_API_KEY` - Upstream credential; also re-read from
///   the process environment on every request when not set here
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Full URL of the upstream chat-completion endpoint.
    #[arg(long, env = "UPSTREAM_ENDPOINT", default_value = defaults::UPSTREAM_ENDPOINT)]
    #[serde(default = "default_endpoint")]
    pub upstream_endpoint: String,

    /// Model forwarded when the request does not specify one.
    #[arg(long, env = "DEFAULT_MODEL", default_value = defaults::MODEL)]
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Timeout in seconds for one forwarded upstream call.
    #[arg(long, env = "UPSTREAM_TIMEOUT", default_value_t = defaults::UPSTREAM_TIMEOUT_SECS)]
    #[serde(default = "default_timeout")]
    pub upstream_timeout: u64,

    /// Upstream API credential.
    ///
    /// When absent, the `BOARDROOM_UPSTREAM_API_KEY` environment variable
    /// is consulted again on every request, matching serverless hosts that
    /// inject secrets after startup.
    #[arg(long, env = ServiceConfig::CREDENTIAL_ENV, hide_env_values = true)]
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_endpoint() -> String {
    defaults::UPSTREAM_ENDPOINT.to_string()
}

fn default_model() -> String {
    defaults::MODEL.to_string()
}

fn default_timeout() -> u64 {
    defaults::UPSTREAM_TIMEOUT_SECS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            upstream_endpoint: default_endpoint(),
            default_model: default_model(),
            upstream_timeout: default_timeout(),
            api_key: None,
        }
    }
}

impl ServiceConfig {
    /// Environment variable consulted for the upstream credential.
    pub const CREDENTIAL_ENV: &'static str = "BOARDROOM_UPSTREAM_API_KEY";

    /// Resolves the upstream credential at call time.
    ///
    /// An explicit configuration value wins; otherwise the process
    /// environment is read on every call. Empty values count as missing.
    pub fn credential(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| {
                std::env::var(Self::CREDENTIAL_ENV)
                    .ok()
                    .filter(|key| !key.is_empty())
            })
    }

    /// Returns the forwarded-call timeout as a [`Duration`].
    pub const fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is outside 1-300 seconds or the
    /// endpoint does not look like an HTTP(S) URL. The credential is
    /// deliberately not validated here: it is resolved per request and its
    /// absence is a runtime condition, not a startup failure.
    pub fn validate(&self) -> Result<()> {
        if self.upstream_timeout == 0 || self.upstream_timeout > 300 {
            return Err(ServiceError::config(format!(
                "upstream timeout {}s is invalid, must be between 1 and 300 seconds",
                self.upstream_timeout
            )));
        }

        if !self.upstream_endpoint.starts_with("http://")
            && !self.upstream_endpoint.starts_with("https://")
        {
            return Err(ServiceError::config(format!(
                "upstream endpoint must start with http:// or https://, got {}",
                self.upstream_endpoint
            )));
        }

        Ok(())
    }

    /// Builds the HTTP upstream client configuration.
    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig {
            endpoint: self.upstream_endpoint.clone(),
            timeout: self.upstream_timeout(),
            ..UpstreamConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config() {
        let config = ServiceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.upstream_endpoint, defaults::UPSTREAM_ENDPOINT);
        assert_eq!(config.default_model, defaults::MODEL);
        assert_eq!(
            config.upstream_timeout(),
            Duration::from_secs(defaults::UPSTREAM_TIMEOUT_SECS)
        );
    }

    #[test]
    fn reject_invalid_timeouts() {
        let mut config = ServiceConfig::default();

        config.upstream_timeout = 0;
        assert!(config.validate().is_err());

        config.upstream_timeout = 301;
        assert!(config.validate().is_err());

        config.upstream_timeout = 60;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reject_non_http_endpoint() {
        let config = ServiceConfig {
            upstream_endpoint: "ftp://example.com".to_string(),
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_credential_wins() {
        let config = ServiceConfig {
            api_key: Some("configured-key".to_string()),
            ..ServiceConfig::default()
        };
        assert_eq!(config.credential().as_deref(), Some("configured-key"));
    }

    #[test]
    fn empty_credential_counts_as_missing() {
        let config = ServiceConfig {
            api_key: Some(String::new()),
            ..ServiceConfig::default()
        };
        // Falls through to the environment, which does not define the
        // deliberately project-specific variable in test runs.
        assert_eq!(config.credential(), std::env::var(ServiceConfig::CREDENTIAL_ENV).ok());
    }

    #[test]
    fn upstream_config_carries_endpoint_and_timeout() {
        let config = ServiceConfig {
            upstream_endpoint: "https://example.com/v1/chat".to_string(),
            upstream_timeout: 45,
            ..ServiceConfig::default()
        };

        let upstream = config.upstream_config();
        assert_eq!(upstream.endpoint, "https://example.com/v1/chat");
        assert_eq!(upstream.timeout, Duration::from_secs(45));
    }
}
