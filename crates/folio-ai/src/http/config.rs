//! HTTP gateway configuration.

use std::fmt;

/// Environment variable that overrides the configured bearer token.
pub const API_TOKEN_ENV: &str = "FOLIO_API_TOKEN";

/// HTTP gateway configuration.
#[derive(Clone)]
pub struct HttpGatewayConfig {
    pub endpoint: String,
    /// Persona plus length cap, sent as the leading system message.
    pub system_instruction: String,
    pub api_token: Option<String>,
}

impl fmt::Debug for HttpGatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpGatewayConfig")
            .field("endpoint", &self.endpoint)
            .field("system_instruction", &self.system_instruction)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpGatewayConfig {
    pub fn new(endpoint: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            system_instruction: system_instruction.into(),
            api_token: None,
        }
    }

    /// Set a bearer token; blank tokens are ignored.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.api_token = if token.trim().is_empty() {
            None
        } else {
            Some(token)
        };
        self
    }

    /// Apply `FOLIO_API_TOKEN` when it is set.
    pub fn with_token_from_env(self) -> Self {
        match std::env::var(API_TOKEN_ENV) {
            Ok(token) => self.with_api_token(token),
            Err(_) => self,
        }
    }
}
