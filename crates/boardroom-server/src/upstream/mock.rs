//! Mock upstream for exercising the forwarding logic without a network.

use std::sync::{Arc, Mutex};

use super::{
    CompletionRequest, CompletionService, CompletionUpstream, Error, Result, UpstreamResponse,
};

/// Mock upstream returning a canned reply and recording every request.
///
/// Clones share the request log, so a test can keep a handle while the
/// service under test owns another.
#[derive(Debug, Clone)]
pub struct MockUpstream {
    status: u16,
    body: String,
    fail: bool,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockUpstream {
    /// Creates a mock that answers every request with the given reply.
    pub fn replying(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            fail: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a mock whose sends always fail at the transport level.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::replying(0, "")
        }
    }

    /// Returns the requests received so far.
    pub fn received(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }

    /// Converts this mock into a [`CompletionService`].
    pub fn into_service(self) -> CompletionService {
        CompletionService::new(self)
    }
}

#[async_trait::async_trait]
impl CompletionUpstream for MockUpstream {
    async fn send(
        &self,
        request: &CompletionRequest,
        _credential: &str,
    ) -> Result<UpstreamResponse> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(request.clone());

        if self.fail {
            return Err(Error::Unavailable("mock transport failure".to_string()));
        }

        Ok(UpstreamResponse::new(self.status, self.body.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_requests_and_replies() -> anyhow::Result<()> {
        let mock = MockUpstream::replying(200, r#"{"choices":[]}"#);
        let request = CompletionRequest {
            model: "openai/gpt-4o-mini".to_string(),
            messages: Vec::new(),
            temperature: 0.4,
            max_tokens: 600,
        };

        let response = mock.send(&request, "test-key").await?;
        assert_eq!(response.status, 200);
        assert_eq!(mock.received().len(), 1);
        assert_eq!(mock.received()[0], request);

        Ok(())
    }

    #[tokio::test]
    async fn failing_mock_errors() {
        let mock = MockUpstream::failing();
        let request = CompletionRequest {
            model: "m".to_string(),
            messages: Vec::new(),
            temperature: 0.0,
            max_tokens: 1,
        };

        assert!(mock.send(&request, "test-key").await.is_err());
    }
}
