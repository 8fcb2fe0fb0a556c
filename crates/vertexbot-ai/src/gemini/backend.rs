//! Stateful chat backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use vertexbot_config::BotConfig;

use crate::{AiError, ChatBackend, Role};

use super::transport::{ChatSession, ChatTransport};
use super::types::Content;

/// Backend for models that keep conversation state server-side.
///
/// The session is opened once, seeded with the system preamble as a user
/// turn and the configured acknowledgment as the model's reply.
pub struct GeminiChatBackend {
    config: Arc<BotConfig>,
    session: Box<dyn ChatSession>,
}

impl GeminiChatBackend {
    pub fn new(config: Arc<BotConfig>, transport: &dyn ChatTransport) -> Self {
        let history = seed_history(&config);
        let session = transport.start_chat(history);
        Self { config, session }
    }
}

pub(crate) fn seed_history(config: &BotConfig) -> Vec<Content> {
    vec![
        Content::text(Role::User, config.system_preamble()),
        Content::text(Role::Model, config.prompt.reply_for_system_message.clone()),
    ]
}

#[async_trait]
impl ChatBackend for GeminiChatBackend {
    async fn send_message(&mut self, text: &str) -> Result<String, AiError> {
        if self.config.debug {
            info!("gemini request: {text}");
        }

        let response = self.session.send_message(text).await?;

        if self.config.debug {
            let dump = serde_json::to_string_pretty(&response)
                .unwrap_or_else(|e| format!("<unserializable response: {e}>"));
            info!("gemini response: {dump}");
        }

        Ok(response.text())
    }
}
