//! Raw upstream reply, relayed to the caller without interpretation.

/// Status code and body text exactly as the provider returned them.
///
/// The proxy never parses or validates the body; error payloads from the
/// provider relay the same way successes do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    /// HTTP status code returned by the provider.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
}

impl UpstreamResponse {
    /// Creates a new upstream response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns whether the provider answered with a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_2xx_only() {
        assert!(UpstreamResponse::new(200, "{}").is_success());
        assert!(UpstreamResponse::new(204, "").is_success());
        assert!(!UpstreamResponse::new(199, "").is_success());
        assert!(!UpstreamResponse::new(429, "rate limited").is_success());
        assert!(!UpstreamResponse::new(500, "oops").is_success());
    }
}
