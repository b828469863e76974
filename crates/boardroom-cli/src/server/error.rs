//! Server lifecycle error types.

use thiserror::Error;

/// Result type for server lifecycle operations.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;

/// Failures raised while starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid server configuration.
    #[error("invalid server configuration: {0}")]
    InvalidConfig(String),

    /// Failed to bind the listen address.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Runtime I/O failure while serving.
    #[error("server runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_address_on_bind_failure() {
        let source = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let error = ServerError::Bind {
            address: "127.0.0.1:3000".to_string(),
            source,
        };
        assert!(error.to_string().contains("127.0.0.1:3000"));
    }
}
