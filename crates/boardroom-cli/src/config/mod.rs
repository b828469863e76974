//! CLI configuration types.

mod server;

use boardroom_server::service::ServiceConfig;
use clap::Parser;

pub use crate::config::server::{log_server_config, ServerConfig};

/// Command-line interface for the Boardroom API server.
#[derive(Debug, Parser)]
#[command(
    name = "boardroom",
    version,
    about = "Boardroom advisory platform API server"
)]
pub struct Cli {
    /// HTTP server configuration.
    #[command(flatten)]
    pub server: ServerConfig,

    /// Proxy service configuration.
    #[command(flatten)]
    pub service: ServiceConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_with_no_arguments() {
        let cli = Cli::try_parse_from(["boardroom"]).expect("defaults parse");
        assert!(cli.server.validate().is_ok());
        assert!(cli.service.validate().is_ok());
    }

    #[test]
    fn cli_parses_explicit_flags() {
        let cli = Cli::try_parse_from([
            "boardroom",
            "--port",
            "8080",
            "--default-model",
            "anthropic/claude-3-haiku",
        ])
        .expect("flags parse");

        assert_eq!(cli.server.port, 8080);
        assert_eq!(cli.service.default_model, "anthropic/claude-3-haiku");
    }
}
