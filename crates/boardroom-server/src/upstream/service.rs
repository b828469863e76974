//! Completion service wrapper with observability.
//!
//! Wraps any [`CompletionUpstream`] implementation behind a cheaply
//! cloneable handle and adds structured logging around each forwarded
//! call.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::{CompletionRequest, CompletionUpstream, Result, UpstreamResponse, TRACING_TARGET};

/// Cheaply cloneable handle to an upstream provider.
#[derive(Clone)]
pub struct CompletionService {
    inner: Arc<dyn CompletionUpstream>,
}

impl CompletionService {
    /// Creates a new service wrapper around the given provider.
    pub fn new<P>(provider: P) -> Self
    where
        P: CompletionUpstream + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Forwards one completion request, logging outcome and timing.
    pub async fn send(
        &self,
        request: &CompletionRequest,
        credential: &str,
    ) -> Result<UpstreamResponse> {
        let start = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            model = %request.model,
            message_count = request.messages.len(),
            "Forwarding completion request"
        );

        let result = self.inner.send(request, credential).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    status = response.status,
                    success = response.is_success(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Upstream responded"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Upstream request failed"
                );
            }
        }

        result
    }
}

impl fmt::Debug for CompletionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionService").finish_non_exhaustive()
    }
}
