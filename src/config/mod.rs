//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Dashboard defaults applied when a selection is not given explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Boss selected when none is requested
    #[serde(default = "default_boss")]
    pub default_boss: String,

    /// Players pre-selected in the comparison chart
    #[serde(default = "default_compare_players")]
    pub compare_players: Vec<String>,
}

fn default_boss() -> String {
    "Petrification Incarnate".to_string()
}

fn default_compare_players() -> Vec<String> {
    vec!["Cruellia".to_string(), "Mika".to_string()]
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_boss: default_boss(),
            compare_players: default_compare_players(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Record table to load (`.csv`, `.jsonl` or `.ndjson`)
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("Siege_Data.csv")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "data_file must not be empty".to_string(),
            ));
        }

        if self.dashboard.default_boss.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "dashboard.default_boss must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_file, PathBuf::from("Siege_Data.csv"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.dashboard.default_boss, "Petrification Incarnate");
        assert_eq!(config.dashboard.compare_players, vec!["Cruellia", "Mika"]);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_blank_boss() {
        let mut config = AppConfig::default();
        config.dashboard.default_boss = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_data_file() {
        let mut config = AppConfig::default();
        config.data_file = PathBuf::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            data_file = "exports/siege.jsonl"

            [dashboard]
            compare_players = ["Nox"]
            "#,
        )
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("exports/siege.jsonl"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.dashboard.default_boss, "Petrification Incarnate");
        assert_eq!(config.dashboard.compare_players, vec!["Nox"]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be parseable
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_file, parsed.data_file);
        assert_eq!(config.dashboard.compare_players, parsed.dashboard.compare_players);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&tmp.path().join("siege-board.toml")).unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("siege-board.toml");
        std::fs::write(&path, "[dashboard]\ndefault_boss = \"\"\n").unwrap();

        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_from_file_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("siege-board.toml");
        std::fs::write(&path, "data_file = [").unwrap();

        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
