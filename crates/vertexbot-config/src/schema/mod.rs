//! Configuration schema types for Vertexbot.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod prompt;
mod vertexai;

pub use prompt::*;
pub use vertexai::*;

use serde::{Deserialize, Serialize};

use crate::token_limits::TokenLimits;

/// Root configuration.
///
/// Immutable once handed to a bot; backends receive it behind an `Arc`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Dump raw request/response payloads to the log.
    pub debug: bool,
    pub vertexai: VertexAiConfig,
    pub prompt: PromptConfig,
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl BotConfig {
    /// Token limits of the configured model.
    pub fn token_limits(&self) -> TokenLimits {
        TokenLimits::for_model(&self.vertexai.model)
    }

    /// Explicit `max_output_tokens`, or the model's response budget.
    pub fn max_output_tokens(&self) -> u32 {
        self.vertexai
            .max_output_tokens
            .unwrap_or_else(|| self.token_limits().response_tokens)
    }

    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            temperature: self.vertexai.temperature,
            top_p: self.vertexai.top_p,
            top_k: self.vertexai.top_k,
            max_output_tokens: self.max_output_tokens(),
        }
    }

    /// System instructions plus the response-language directive.
    pub fn system_preamble(&self) -> String {
        format!(
            "{}\nIMPORTANT: Entire response must be in the language with ISO code: {}\n",
            self.prompt.system_message, self.prompt.language
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_output_tokens_defaults_to_model_budget() {
        let mut config = BotConfig::default();
        config.vertexai.model = "text-bison".into();
        assert_eq!(config.max_output_tokens(), 1024);
    }

    #[test]
    fn max_output_tokens_override_wins() {
        let mut config = BotConfig::default();
        config.vertexai.max_output_tokens = Some(256);
        assert_eq!(config.generation_params().max_output_tokens, 256);
    }

    #[test]
    fn generation_params_mirror_vertexai_section() {
        let mut config = BotConfig::default();
        config.vertexai.temperature = 0.3;
        config.vertexai.top_p = 0.8;
        config.vertexai.top_k = 20;
        let params = config.generation_params();
        assert_eq!(params.temperature, 0.3);
        assert_eq!(params.top_p, 0.8);
        assert_eq!(params.top_k, 20);
    }

    #[test]
    fn system_preamble_pins_language() {
        let mut config = BotConfig::default();
        config.prompt.system_message = "You are a reviewer.".into();
        config.prompt.language = "ja-JP".into();
        assert_eq!(
            config.system_preamble(),
            "You are a reviewer.\nIMPORTANT: Entire response must be in the language with ISO code: ja-JP\n"
        );
    }
}
