//! Upstream transport error types.

use thiserror::Error;

/// Result type for upstream operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures raised while talking to the upstream completion provider.
///
/// Upstream HTTP *responses* are never errors, whatever their status; only
/// failures that prevent a response from being produced land here.
#[derive(Debug, Error)]
pub enum Error {
    /// The outbound HTTP call failed before a response was produced
    /// (connect failure, timeout, broken transfer).
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured endpoint is not a valid URL.
    #[error("invalid upstream endpoint: {0}")]
    InvalidEndpoint(String),

    /// The request payload could not be serialized.
    #[error("failed to encode completion request: {0}")]
    Encode(#[from] serde_json::Error),

    /// The provider is unavailable for a reason known up front.
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let error = Error::InvalidEndpoint("not-a-url".to_string());
        assert!(error.to_string().contains("not-a-url"));

        let error = Error::Unavailable("maintenance window".to_string());
        assert!(error.to_string().contains("maintenance window"));
    }
}
