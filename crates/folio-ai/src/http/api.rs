//! CompletionGateway trait implementation for HttpGateway.

use async_trait::async_trait;
use tracing::debug;

use crate::{CompletionGateway, GatewayError, GatewayFailure, Message};

use super::client::{excerpt, parse_reply, HttpGateway};

#[async_trait]
impl CompletionGateway for HttpGateway {
    async fn complete(&self, messages: &[Message]) -> Result<String, GatewayError> {
        let body = self.build_request_body(messages);

        debug!(
            endpoint = %self.config.endpoint,
            messages = messages.len(),
            "completion request"
        );

        let mut request = self.http.post(&self.config.endpoint).json(&body);
        if let Some(ref token) = self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayFailure::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayFailure::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(GatewayFailure::Status {
                status: status.as_u16(),
                body: excerpt(&text),
            }
            .into());
        }

        let reply = parse_reply(&text)?;
        debug!(chars = reply.len(), "completion reply");
        Ok(reply)
    }
}
