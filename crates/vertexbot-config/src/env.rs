//! Environment variable overrides.
//!
//! Applied after the TOML file is loaded so deployments can pin the model
//! or project without editing the file.

use tracing::{info, warn};

use crate::schema::BotConfig;

pub const ENV_MODEL: &str = "VERTEXBOT_MODEL";
pub const ENV_PROJECT_ID: &str = "VERTEXBOT_PROJECT_ID";
pub const ENV_LOCATION: &str = "VERTEXBOT_LOCATION";
pub const ENV_LANGUAGE: &str = "VERTEXBOT_LANGUAGE";
pub const ENV_DEBUG: &str = "VERTEXBOT_DEBUG";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut BotConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides using a custom variable lookup.
pub fn apply_overrides_from(config: &mut BotConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(model) = lookup(ENV_MODEL) {
        info!("{ENV_MODEL} overrides model: {model}");
        config.vertexai.model = model;
    }
    if let Some(project) = lookup(ENV_PROJECT_ID) {
        config.vertexai.project_id = project;
    }
    if let Some(location) = lookup(ENV_LOCATION) {
        config.vertexai.location = location;
    }
    if let Some(language) = lookup(ENV_LANGUAGE) {
        config.prompt.language = language;
    }
    if let Some(raw) = lookup(ENV_DEBUG) {
        match parse_bool(&raw) {
            Some(flag) => config.debug = flag,
            None => warn!("ignoring {ENV_DEBUG}={raw}: expected true/false"),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
