//! CORS headers for the browser-facing proxy surface.
//!
//! The proxy serves a public marketing frontend, so the policy is fixed and
//! permissive rather than configurable per deployment: any origin, the two
//! headers browsers send for this API, and the two methods the route
//! accepts.

use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Origins allowed to call the proxy.
pub const ALLOW_ORIGIN: &str = "*";

/// Request headers a caller may send.
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Methods the proxy route accepts.
pub const ALLOW_METHODS: &str = "POST, OPTIONS";

/// Returns the fixed CORS header set.
pub fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ),
    ]
}

/// Applies the fixed CORS headers to a response header map.
pub fn apply(headers: &mut HeaderMap) {
    for (name, value) in cors_headers() {
        headers.insert(name, value);
    }
}

/// Answers CORS preflight requests with an empty 204.
pub async fn preflight() -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    apply(response.headers_mut());
    response
}
