//! Application state and dependency injection.

use crate::service::{Result, ServiceConfig, ServiceError};
use crate::upstream::{CompletionService, HttpUpstream};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    config: ServiceConfig,
    completions: CompletionService,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Validates the configuration and builds the reqwest-backed upstream
    /// client.
    pub fn from_config(config: ServiceConfig) -> Result<Self> {
        config.validate()?;

        let upstream = HttpUpstream::new(config.upstream_config()).map_err(|error| {
            ServiceError::upstream_with_source("failed to create upstream client", error)
        })?;

        Ok(Self::new(config, upstream.into_service()))
    }

    /// Creates state from pre-built components.
    ///
    /// Tests use this to inject a mock upstream.
    pub fn new(config: ServiceConfig, completions: CompletionService) -> Self {
        Self {
            config,
            completions,
        }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(config: ServiceConfig);
impl_di!(completions: CompletionService);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_builds_state() {
        let state = ServiceState::from_config(ServiceConfig::default());
        assert!(state.is_ok());
    }

    #[test]
    fn from_config_rejects_invalid_config() {
        let config = ServiceConfig {
            upstream_timeout: 0,
            ..ServiceConfig::default()
        };
        assert!(ServiceState::from_config(config).is_err());
    }
}
