//! Vertexbot configuration system.
//!
//! Provides TOML-based configuration for the chat backends: model
//! selection, generation parameters, the system preamble and the target
//! response language. All sections use sensible defaults so partial
//! configs work out of the box, and a small set of environment variables
//! can override file values.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vertexbot_config::{apply_env_overrides, config_to_json, toml_loader};
//!
//! let mut config = toml_loader::load_default().expect("failed to load config");
//! apply_env_overrides(&mut config);
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod env;
pub mod schema;
pub mod token_limits;
pub mod toml_loader;
pub mod validation;

pub use env::apply_env_overrides;
pub use schema::{BotConfig, GenerationParams, PromptConfig, VertexAiConfig};
pub use token_limits::TokenLimits;

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BotConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
