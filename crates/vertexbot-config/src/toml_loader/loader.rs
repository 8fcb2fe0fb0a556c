//! Reads `config.toml`, seeding it from the template on first run.

use crate::schema::BotConfig;
use crate::validation;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use vertexbot_common::ConfigError;

use super::template::default_config_toml;

/// Parse a config file. Missing fields take their serde defaults; failed
/// validation is only a warning.
pub fn load_from_path(path: &Path) -> Result<BotConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    let config = parse(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `<config_dir>/vertexbot/config.toml`, writing the commented
/// template there first if it does not exist yet.
pub fn load_default() -> Result<BotConfig, ConfigError> {
    let dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    load_or_init(&dir.join("vertexbot").join("config.toml"))
}

pub(super) fn load_or_init(path: &Path) -> Result<BotConfig, ConfigError> {
    if path.exists() {
        return load_from_path(path);
    }
    write_template(path)?;
    parse(default_config_toml())
}

fn parse(content: &str) -> Result<BotConfig, ConfigError> {
    let config: BotConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }
    Ok(config)
}

fn write_template(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, at: PathBuf, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", at.display()))
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| io_err("create config directory", parent.to_path_buf(), e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| io_err("write default config to", path.to_path_buf(), e))?;
    info!("created default config at {}", path.display());
    Ok(())
}
