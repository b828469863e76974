//! Request payloads accepted by the proxy surface.

use serde::Deserialize;

use crate::service::{defaults, ServiceConfig};
use crate::upstream::{ChatMessage, CompletionRequest};

/// Body of a proxied chat-completion call.
///
/// Every field is optional; missing values fall back to the configured
/// defaults before the request is forwarded.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ChatCompletionParams {
    /// Ordered conversation messages.
    #[serde(default)]
    pub messages: Vec<ChatMessage>,

    /// Upstream model identifier.
    #[serde(default)]
    pub model: Option<String>,

    /// Sampling temperature.
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Maximum output tokens.
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl ChatCompletionParams {
    /// Applies configured defaults and produces the upstream payload.
    pub fn into_request(self, config: &ServiceConfig) -> CompletionRequest {
        CompletionRequest {
            model: self
                .model
                .unwrap_or_else(|| config.default_model.clone()),
            messages: self.messages,
            temperature: self.temperature.unwrap_or(defaults::TEMPERATURE),
            max_tokens: self.max_tokens.unwrap_or(defaults::MAX_TOKENS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_take_all_defaults() {
        let config = ServiceConfig::default();
        let request = ChatCompletionParams::default().into_request(&config);

        assert_eq!(request.model, config.default_model);
        assert!(request.messages.is_empty());
        assert_eq!(request.temperature, defaults::TEMPERATURE);
        assert_eq!(request.max_tokens, defaults::MAX_TOKENS);
    }

    #[test]
    fn supplied_fields_override_defaults() {
        let config = ServiceConfig::default();
        let params: ChatCompletionParams = serde_json::from_str(
            r#"{
                "messages": [{"role": "user", "content": "hello"}],
                "model": "anthropic/claude-3-haiku",
                "temperature": 0.9,
                "max_tokens": 128
            }"#,
        )
        .expect("params parse");

        let request = params.into_request(&config);
        assert_eq!(request.model, "anthropic/claude-3-haiku");
        assert_eq!(request.messages, vec![ChatMessage::user("hello")]);
        assert_eq!(request.temperature, 0.9);
        assert_eq!(request.max_tokens, 128);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let params: Result<ChatCompletionParams, _> =
            serde_json::from_str(r#"{"stream": true, "model": "m"}"#);
        assert!(params.is_ok());
    }
}
