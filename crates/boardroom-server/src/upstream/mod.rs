//! Narrow interface to the upstream chat-completion provider.
//!
//! The forwarding logic only ever sees `send(request, credential) ->
//! response`, so tests substitute [`MockUpstream`] for the reqwest-backed
//! [`HttpUpstream`] without touching the network.

mod client;
mod error;
pub mod mock;
mod request;
mod response;
mod service;

pub use crate::upstream::client::{HttpUpstream, UpstreamConfig};
pub use crate::upstream::error::{Error, Result};
pub use crate::upstream::mock::MockUpstream;
pub use crate::upstream::request::{ChatMessage, CompletionRequest};
pub use crate::upstream::response::UpstreamResponse;
pub use crate::upstream::service::CompletionService;

/// Tracing target for upstream operations.
pub const TRACING_TARGET: &str = "boardroom_server::upstream";

/// A substitutable upstream chat-completion provider.
#[async_trait::async_trait]
pub trait CompletionUpstream: Send + Sync {
    /// Forwards one completion request with the given bearer credential.
    ///
    /// Implementations return the upstream reply as-is; callers decide what
    /// a non-success status means. Only transport-level failures surface as
    /// errors.
    async fn send(
        &self,
        request: &CompletionRequest,
        credential: &str,
    ) -> Result<UpstreamResponse>;
}
