//! Configuration settings for techfocus.
//!
//! Settings are loaded from `./techfocus.yaml` when present.

use serde::{Deserialize, Serialize};

use crate::error::FocusError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Focus cycle settings.
    pub focus: FocusConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Focus cycle settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FocusConfig {
    /// Initial value of the minutes field.
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
    /// Enable desktop notifications.
    #[serde(default = "default_true")]
    pub notifications: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,
}

// Default value functions for serde
const fn default_minutes() -> u32 {
    25
}

const fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_minutes(),
            notifications: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FocusError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FocusError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        // An empty file deserializes to unit, not a mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            FocusError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.focus.default_minutes, 25);
        assert!(config.focus.notifications);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("techfocus.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_empty_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("techfocus.yaml");
        std::fs::write(&config_path, "\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("techfocus.yaml");

        let yaml = r"
focus:
  default_minutes: 50
  notifications: false
logging:
  level: debug
";
        std::fs::write(&config_path, yaml).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(loaded.logging.level, "debug");

        assert_eq!(loaded.focus.default_minutes, 50);
        assert!(!loaded.focus.notifications);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("techfocus.yaml");

        let partial_yaml = r"
focus:
  default_minutes: 45
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.focus.default_minutes, 45);
        assert!(config.focus.notifications);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("techfocus.yaml");
        std::fs::write(&config_path, "focus: [not, a, map]").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, FocusError::Config(_)));
    }
}
