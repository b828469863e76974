//! HTTP error handling for the proxy surface.
//!
//! The error taxonomy is transport-level only: each kind maps to a fixed
//! status code and a short plain-text message, with no structured payload.
//! Responses carry the permissive CORS headers so browser clients can read
//! failures.

use std::borrow::Cow;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::middleware::cors;

/// The error type for HTTP handlers in the server.
#[derive(Debug, Clone)]
#[must_use = "errors do nothing unless serialized"]
pub struct Error {
    kind: ErrorKind,
    context: Option<Cow<'static, str>>,
}

impl Error {
    /// Creates a new [`Error`] with the specified kind.
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Attaches context appended to the plain-text body.
    #[inline]
    pub fn with_context(self, context: impl Into<Cow<'static, str>>) -> Self {
        Self {
            context: Some(context.into()),
            ..self
        }
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the context if present.
    #[inline]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.kind.message(),
            self.kind.status_code().as_u16()
        )?;
        if let Some(ref context) = self.context {
            write!(f, ": {context}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = match self.context {
            Some(context) => format!("{}: {context}", self.kind.message()),
            None => self.kind.message().to_string(),
        };

        let mut response = (self.kind.status_code(), body).into_response();
        cors::apply(response.headers_mut());
        response
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// A specialized [`Result`] type for HTTP operations.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The failure modes the proxy surface can produce itself.
///
/// Upstream HTTP responses are relayed verbatim and never appear here.
#[must_use = "error kinds do nothing unless used to create errors"]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400 Bad Request - request body is not valid JSON
    BadRequest,
    /// 404 Not Found - no such route
    NotFound,
    /// 405 Method Not Allowed - proxy route accepts POST and OPTIONS only
    MethodNotAllowed,
    /// 500 Internal Server Error - upstream credential is not configured
    MissingCredential,
    /// 502 Bad Gateway - upstream could not be reached
    UpstreamUnreachable,
    /// 500 Internal Server Error - unexpected failure
    #[default]
    InternalServerError,
}

impl ErrorKind {
    /// Converts this error kind into a full [`Error`].
    #[inline]
    pub fn into_error(self) -> Error {
        Error::new(self)
    }

    /// Creates an [`Error`] with the specified context.
    #[inline]
    pub fn with_context(self, context: impl Into<Cow<'static, str>>) -> Error {
        Error::new(self).with_context(context)
    }

    /// Returns the HTTP status code for this error kind.
    #[inline]
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamUnreachable => StatusCode::BAD_GATEWAY,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the plain-text message for this error kind.
    #[inline]
    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "request body is not valid JSON",
            Self::NotFound => "resource not found",
            Self::MethodNotAllowed => "method not allowed, use POST",
            Self::MissingCredential => "upstream API credential is not configured",
            Self::UpstreamUnreachable => "failed to reach the upstream completion service",
            Self::InternalServerError => "internal server error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl IntoResponse for ErrorKind {
    #[inline]
    fn into_response(self) -> Response {
        self.into_error().into_response()
    }
}
