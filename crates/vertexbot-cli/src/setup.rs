//! Startup helpers: `.env` loading and config resolution.

use std::path::Path;

use vertexbot_config::{toml_loader, validation, BotConfig};

use crate::cli::Args;

/// Load environment variables from a `.env` file (KEY=VALUE lines).
/// Variables already set in the process win.
pub fn load_dotenv(path: &Path) {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return;
    };
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(&key).is_err() {
            std::env::set_var(key, value);
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

/// Resolve the effective config: file (explicit or default), then
/// environment overrides, then CLI overrides. Validation problems are
/// logged, not fatal.
pub fn resolve_config(args: &Args) -> BotConfig {
    let loaded = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {path}");
            toml_loader::load_from_path(Path::new(path))
        }
        None => toml_loader::load_default(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        BotConfig::default()
    });

    vertexbot_config::apply_env_overrides(&mut config);
    if let Some(ref model) = args.model {
        config.vertexai.model = model.clone();
    }

    if let Err(e) = validation::validate(&config) {
        tracing::warn!("{e}");
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotenv_parsing_skips_comments_and_strips_quotes() {
        let parsed = parse_dotenv(
            "# comment\n\nVERTEXBOT_MODEL=\"text-bison\"\n  VERTEXBOT_LOCATION = 'us-east1'\nbogus line\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("VERTEXBOT_MODEL".to_string(), "text-bison".to_string()),
                ("VERTEXBOT_LOCATION".to_string(), "us-east1".to_string()),
            ]
        );
    }

    #[test]
    fn cli_model_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[vertexai]\nmodel = \"text-bison\"\nproject_id = \"acme\"\n")
            .unwrap();

        let args = Args {
            config: Some(path.to_string_lossy().into_owned()),
            model: Some("gemini-pro".into()),
            message: None,
            log_level: None,
            print_config: false,
        };
        let config = resolve_config(&args);
        assert_eq!(config.vertexai.model, "gemini-pro");
        assert_eq!(config.vertexai.project_id, "acme");
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        let args = Args {
            config: Some("/tmp/definitely_missing_vertexbot.toml".into()),
            model: None,
            message: None,
            log_level: None,
            print_config: false,
        };
        let config = resolve_config(&args);
        assert_eq!(config.prompt.language, "en-US");
    }
}
