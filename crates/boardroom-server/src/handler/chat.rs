//! Chat completion proxy handler.
//!
//! Forwards completion requests to the configured upstream provider with a
//! server-held credential and relays the upstream reply verbatim: status
//! code and raw body unchanged, permissive CORS headers attached. The
//! proxy keeps no state across calls and performs no retries, caching, or
//! validation of the upstream payload.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;

use crate::handler::request::ChatCompletionParams;
use crate::handler::{Error, ErrorKind, Result};
use crate::middleware::cors;
use crate::service::{ServiceConfig, ServiceState};
use crate::upstream::{CompletionService, UpstreamResponse};

/// Tracing target for proxy operations.
const TRACING_TARGET: &str = "boardroom_server::handler::chat";

/// Proxies one chat-completion request to the upstream provider.
#[tracing::instrument(skip_all)]
async fn chat_completions(
    State(config): State<ServiceConfig>,
    State(completions): State<CompletionService>,
    body: Bytes,
) -> Result<Response> {
    let params = parse_params(&body)?;

    // The credential is resolved per request, not at startup: serverless
    // hosts inject secrets into the environment independently of process
    // lifetime.
    let credential = config.credential().ok_or_else(|| {
        tracing::error!(
            target: TRACING_TARGET,
            variable = ServiceConfig::CREDENTIAL_ENV,
            "Upstream credential is not configured"
        );
        ErrorKind::MissingCredential.into_error()
    })?;

    let request = params.into_request(&config);

    tracing::debug!(
        target: TRACING_TARGET,
        model = %request.model,
        message_count = request.messages.len(),
        "Proxying completion request"
    );

    let upstream = completions
        .send(&request, &credential)
        .await
        .map_err(|error| ErrorKind::UpstreamUnreachable.with_context(error.to_string()))?;

    Ok(relay(upstream))
}

/// Parses the request body, treating an empty body as an empty object.
fn parse_params(body: &[u8]) -> Result<ChatCompletionParams> {
    if body.is_empty() {
        return Ok(ChatCompletionParams::default());
    }

    serde_json::from_slice(body).map_err(|error| {
        tracing::debug!(
            target: TRACING_TARGET,
            error = %error,
            "Rejecting malformed request body"
        );
        ErrorKind::BadRequest.with_context(error.to_string())
    })
}

/// Builds the relayed response: upstream status, raw body, CORS headers,
/// JSON content type.
fn relay(upstream: UpstreamResponse) -> Response {
    let status =
        StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut response = (status, upstream.body).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    cors::apply(headers);
    response
}

/// Rejects unsupported methods on the proxy route.
async fn method_not_allowed() -> Error {
    ErrorKind::MethodNotAllowed.into_error()
}

/// Returns a [`Router`] with the proxy routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route(
        "/api/chat/completions",
        post(chat_completions)
            .options(cors::preflight)
            .fallback(method_not_allowed),
    )
}
