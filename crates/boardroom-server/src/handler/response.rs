//! Response payloads produced by the server's own endpoints.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`; the proxy holds no connections that could degrade.
    pub status: String,
    /// Server version.
    pub version: String,
    /// When the probe was answered.
    pub checked_at: Timestamp,
}

impl HealthResponse {
    /// Builds a healthy probe response for the running server.
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            checked_at: Timestamp::now(),
        }
    }
}
