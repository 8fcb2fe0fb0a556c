//! Prompt configuration types.

use serde::{Deserialize, Serialize};

/// System preamble and response-language settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub system_message: String,
    /// Acknowledgment seeded as the model's reply to the system message.
    pub reply_for_system_message: String,
    /// ISO code of the language every response must be written in.
    pub language: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            system_message: "You are a highly experienced software engineer. \
                             Review the code changes you are given and answer \
                             questions about them concisely."
                .into(),
            reply_for_system_message: "Understood. I will follow these instructions.".into(),
            language: "en-US".into(),
        }
    }
}
