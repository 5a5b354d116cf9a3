//! Completion endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where completion requests are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Full URL of the completion endpoint (`POST`).
    pub endpoint: String,
    /// Optional bearer token; empty means no `Authorization` header.
    /// `FOLIO_API_TOKEN` overrides this at startup.
    pub api_token: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8787/api/chat".into(),
            api_token: String::new(),
        }
    }
}
