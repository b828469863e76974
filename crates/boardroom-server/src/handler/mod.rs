//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod chat;
mod error;
mod monitors;
mod request;
mod response;

use axum::response::{IntoResponse, Response};
use axum::Router;

pub use crate::handler::error::{Error, ErrorKind, Result};
pub use crate::handler::request::ChatCompletionParams;
pub use crate::handler::response::HealthResponse;
use crate::service::ServiceState;

/// Answers requests for unknown routes.
#[inline]
async fn fallback() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with all routes, ready to receive state.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .merge(chat::routes())
        .merge(monitors::routes())
        .fallback(fallback)
}
