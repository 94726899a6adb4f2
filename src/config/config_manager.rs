use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::constants::{
    ANALYTICS_ENABLED_ENV, API_KEY_ENV, CHAT_ENABLED_ENV, CONFIG_FILE_NAME, CONFIG_PATH_ENV,
    MAX_MAX_TOKENS, MAX_TEMPERATURE, MAX_TOKENS_ENV, MIN_MAX_TOKENS, MIN_TEMPERATURE, MODEL_ENV,
    PORT_ENV, SITE_URL_ENV, TEMPERATURE_ENV,
};
use crate::errors::KostWebResult;
use crate::structs::config::config::Config;
use crate::structs::validation_result::ValidationResult;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

pub struct ConfigManager;

impl ConfigManager {

    /// Builds the process-wide configuration once: optional TOML file first,
    /// then environment variables on top. The result is passed explicitly to
    /// every component that needs it.
    pub fn load() -> KostWebResult<Config> {
        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                log::info!("📋 Loading config from: {}", path.display());
                Self::load_file(&path)?
            }
            _ => Config::default(),
        };

        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    pub fn load_file(path: &Path) -> Result<Config, ConfigFileError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigFileError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    fn config_file_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir().map(|d| d.join("kost-web").join("config.toml"))
    }

    fn apply_env_overrides(config: &mut Config) {
        if let Ok(api_key) = std::env::var(API_KEY_ENV) {
            config.ai.api_key = api_key;
        }

        if let Ok(site_url) = std::env::var(SITE_URL_ENV) {
            config.app.site_url = site_url;
        }

        if let Ok(model) = std::env::var(MODEL_ENV) {
            config.ai.model = model;
        }

        if let Ok(raw) = std::env::var(MAX_TOKENS_ENV) {
            match raw.parse() {
                Ok(value) => config.ai.max_tokens = value,
                Err(_) => log::warn!(
                    "⚠️ Ignoring unparseable {}='{}', keeping {}",
                    MAX_TOKENS_ENV,
                    raw,
                    config.ai.max_tokens
                ),
            }
        }

        if let Ok(raw) = std::env::var(TEMPERATURE_ENV) {
            match raw.parse() {
                Ok(value) => config.ai.temperature = value,
                Err(_) => log::warn!(
                    "⚠️ Ignoring unparseable {}='{}', keeping {}",
                    TEMPERATURE_ENV,
                    raw,
                    config.ai.temperature
                ),
            }
        }

        if let Ok(raw) = std::env::var(PORT_ENV) {
            match raw.parse() {
                Ok(value) => config.app.port = value,
                Err(_) => log::warn!(
                    "⚠️ Ignoring unparseable {}='{}', keeping {}",
                    PORT_ENV,
                    raw,
                    config.app.port
                ),
            }
        }

        // Chat is on unless the literal "false"; analytics is off unless the
        // literal "true".
        if let Ok(raw) = std::env::var(CHAT_ENABLED_ENV) {
            config.features.chat_enabled = raw != "false";
        }

        if let Ok(raw) = std::env::var(ANALYTICS_ENABLED_ENV) {
            config.features.analytics_enabled = raw == "true";
        }
    }

    /// Collects every problem rather than stopping at the first.
    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        if config.ai.api_key.is_empty() {
            result
                .errors
                .push(format!("Missing {} environment variable", API_KEY_ENV));
        }

        if config.ai.max_tokens < MIN_MAX_TOKENS || config.ai.max_tokens > MAX_MAX_TOKENS {
            result.errors.push(format!(
                "{} must be between {} and {} (got {})",
                MAX_TOKENS_ENV, MIN_MAX_TOKENS, MAX_MAX_TOKENS, config.ai.max_tokens
            ));
        }

        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&config.ai.temperature) {
            result.errors.push(format!(
                "{} must be between {} and {} (got {})",
                TEMPERATURE_ENV, MIN_TEMPERATURE, MAX_TEMPERATURE, config.ai.temperature
            ));
        }

        if !config.features.chat_enabled {
            result
                .warnings
                .push("Chat is disabled; /api/chat will refuse requests".to_string());
        }

        result
    }

    pub fn create_sample_config() -> KostWebResult<PathBuf> {
        let sample_config = r#"# Kost Citra & Tiara web service configuration
# Environment variables (OPENROUTER_API_KEY, SITE_URL, AI_MODEL, AI_MAX_TOKENS,
# AI_TEMPERATURE, CHAT_ENABLED, ANALYTICS_ENABLED, KOST_WEB_PORT) override
# these values.

[app]
name = "Kost Citra & Tiara"
site_url = "http://localhost:3000"
port = 3000

[ai]
# api_key = "sk-or-..."   # prefer the OPENROUTER_API_KEY environment variable
base_url = "https://openrouter.ai/api/v1"
model = "x-ai/grok-4.1-fast:free"
max_tokens = 512
temperature = 0.7

[features]
chat_enabled = true
analytics_enabled = false
"#;

        let path = PathBuf::from(CONFIG_FILE_NAME);
        fs::write(&path, sample_config)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use super::*;

    #[test]
    fn validation_reports_every_out_of_range_field() {
        let mut config = Config::default();
        config.ai.api_key = String::new();
        config.ai.max_tokens = 0;
        config.ai.temperature = 2.0;

        let result = ConfigManager::validate_config(&config);

        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.iter().any(|e| e.contains(API_KEY_ENV)));
        assert!(result.errors.iter().any(|e| e.contains(MAX_TOKENS_ENV)));
        assert!(result.errors.iter().any(|e| e.contains(TEMPERATURE_ENV)));
    }

    #[test]
    fn validation_passes_for_complete_config() {
        let mut config = Config::default();
        config.ai.api_key = "sk-or-test".to_string();

        let result = ConfigManager::validate_config(&config);

        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn validation_warns_when_chat_is_disabled() {
        let mut config = Config::default();
        config.ai.api_key = "sk-or-test".to_string();
        config.features.chat_enabled = false;

        let result = ConfigManager::validate_config(&config);

        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn load_file_reads_overrides_and_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[ai]
model = "google/gemma-3-27b-it:free"
max_tokens = 256
"#
        )
        .unwrap();

        let config = ConfigManager::load_file(file.path()).unwrap();

        assert_eq!(config.ai.model, "google/gemma-3-27b-it:free");
        assert_eq!(config.ai.max_tokens, 256);
        assert!((config.ai.temperature - 0.7).abs() < f32::EPSILON);
        assert!(config.features.chat_enabled);
    }

    #[test]
    fn load_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not valid toml [[").unwrap();

        let error = ConfigManager::load_file(file.path()).unwrap_err();

        assert!(matches!(error, ConfigFileError::Parse { .. }));
    }
}
