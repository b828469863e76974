//! Liveness monitoring for the proxy service.
//!
//! The proxy holds no connections or resources that could degrade, so the
//! probe is unconditional; it exists so deploy tooling has something to
//! poll.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::handler::response::HealthResponse;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "boardroom_server::handler::monitors";

/// Answers a liveness probe.
async fn health_status() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse::healthy();

    tracing::debug!(
        target: TRACING_TARGET,
        version = %response.version,
        "Health probe answered"
    );

    (StatusCode::OK, Json(response))
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}
