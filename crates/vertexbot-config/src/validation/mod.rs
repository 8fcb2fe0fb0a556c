//! Full configuration validation.
//!
//! Checks sampling ranges and required strings, collecting every problem
//! into a single `ConfigError`.

mod helpers;


use crate::schema::BotConfig;
use helpers::{validate_not_empty, validate_range, validate_range_f64};
use vertexbot_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let vertexai = &config.vertexai;
    validate_not_empty(&mut errors, "vertexai.model", &vertexai.model);
    validate_not_empty(&mut errors, "vertexai.location", &vertexai.location);
    validate_range_f64(&mut errors, "vertexai.temperature", vertexai.temperature, 0.0, 2.0);
    validate_range_f64(&mut errors, "vertexai.top_p", vertexai.top_p, 0.0, 1.0);
    validate_range(&mut errors, "vertexai.top_k", vertexai.top_k, 1, 40);
    if let Some(max) = vertexai.max_output_tokens {
        validate_range(&mut errors, "vertexai.max_output_tokens", max, 1, 8192);
    }

    validate_not_empty(&mut errors, "prompt.language", &config.prompt.language);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
