//! HTTP gateway struct, request building, and response parsing.

use crate::{GatewayFailure, Message, EMPTY_REPLY_PLACEHOLDER};

use super::config::HttpGatewayConfig;

/// Longest error-body excerpt kept for logging.
const ERROR_BODY_EXCERPT: usize = 200;

/// Completion gateway backed by a single JSON `POST`.
pub struct HttpGateway {
    pub(crate) config: HttpGatewayConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpGateway {
    /// Uses the transport's default timeouts.
    pub fn new(config: HttpGatewayConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &HttpGatewayConfig {
        &self.config
    }

    /// Build the JSON request body: system instruction first, then the
    /// transcript messages in order.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let mut msgs = Vec::with_capacity(messages.len() + 1);
        msgs.push(Message::system(self.config.system_instruction.clone()));
        msgs.extend(messages.iter().cloned());
        serde_json::json!({ "messages": msgs })
    }
}

/// Extract the reply text from a response body.
///
/// A missing, null, or blank `content` yields the placeholder; anything
/// that is not a JSON object with an optional string `content` is
/// malformed.
pub(crate) fn parse_reply(body: &str) -> Result<String, GatewayFailure> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| GatewayFailure::Malformed(e.to_string()))?;

    let object = json
        .as_object()
        .ok_or_else(|| GatewayFailure::Malformed("expected a JSON object".into()))?;

    let reply = match object.get("content") {
        None | Some(serde_json::Value::Null) => "",
        Some(serde_json::Value::String(text)) => text.trim(),
        Some(other) => {
            return Err(GatewayFailure::Malformed(format!(
                "`content` must be a string, got {other}"
            )))
        }
    };

    if reply.is_empty() {
        Ok(EMPTY_REPLY_PLACEHOLDER.to_string())
    } else {
        Ok(reply.to_string())
    }
}

pub(crate) fn excerpt(body: &str) -> String {
    body.chars().take(ERROR_BODY_EXCERPT).collect()
}
