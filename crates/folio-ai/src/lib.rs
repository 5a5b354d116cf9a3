//! Completion gateway for the Folio assistant.
//!
//! Exchanges an ordered transcript for the next assistant reply via a
//! remote completion endpoint. One request per call: no streaming, no
//! retries. Every failure collapses into a single [`GatewayError`].

pub mod http;

use async_trait::async_trait;

pub use http::{HttpGateway, HttpGatewayConfig};

/// Substituted when the endpoint answers with an empty or missing reply.
pub const EMPTY_REPLY_PLACEHOLDER: &str = "I'm not sure how to respond.";

#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Request the next assistant reply for `messages`.
    ///
    /// `messages` mirrors the transcript 1:1; implementations add their
    /// own system instruction. On success the returned text is trimmed
    /// and never empty.
    async fn complete(&self, messages: &[Message]) -> Result<String, GatewayError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Any failure contacting the endpoint or reading its reply.
///
/// Callers treat every instance the same way; [`GatewayError::failure`]
/// exists for operator logging only.
#[derive(Debug, thiserror::Error)]
#[error("completion gateway failed: {failure}")]
pub struct GatewayError {
    failure: GatewayFailure,
}

impl GatewayError {
    pub fn failure(&self) -> &GatewayFailure {
        &self.failure
    }
}

impl From<GatewayFailure> for GatewayError {
    fn from(failure: GatewayFailure) -> Self {
        Self { failure }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayFailure {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}
