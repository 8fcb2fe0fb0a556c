//! Conversational adapter over Vertex AI model families.
//!
//! Callers talk to a single [`Bot`] whose `chat` never fails. Behind it
//! sits one of two backends chosen from the configured model id:
//! - Gemini chat models keep the conversation in a backend session
//!   seeded with the system preamble ([`gemini::GeminiChatBackend`]).
//! - Other models have no session, so the backend keeps the transcript
//!   locally and resends it with every predict call
//!   ([`palm::PalmPredictBackend`]).

pub mod auth;
pub mod bot;
pub mod gemini;
pub(crate) mod http;
pub mod palm;
pub mod selection;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

pub use auth::VertexAuth;
pub use bot::Bot;
pub use gemini::{ChatSession, ChatTransport, GeminiChatBackend, VertexChatTransport};
pub use palm::{PalmPredictBackend, PredictTransport, VertexPredictTransport};
pub use http::ModelEndpoint;
pub use selection::BackendKind;

/// A backend that turns one user message into one reply.
///
/// Implementations may keep conversation state, so calls take `&mut self`
/// and must be issued one at a time.
#[async_trait]
pub trait ChatBackend: Send {
    async fn send_message(&mut self, text: &str) -> Result<String, AiError>;

    /// Locally held transcript, for backends that keep one.
    fn transcript(&self) -> Option<&[Turn]> {
        None
    }
}

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Auth error: {0}")]
    Auth(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<AiError> for vertexbot_common::BotError {
    fn from(err: AiError) -> Self {
        vertexbot_common::BotError::Ai(err.to_string())
    }
}
