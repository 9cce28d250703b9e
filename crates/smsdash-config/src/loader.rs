//! Configuration loading utilities

use crate::Settings;
use smsdash_common::{DashError, Result as DashResult};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// File names looked up in the working directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["smsdash.yaml", "smsdash.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl From<ConfigError> for DashError {
    fn from(err: ConfigError) -> Self {
        DashError::config_with_source(err.to_string(), err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Settings, ConfigError> {
        let settings: Settings = serde_yaml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a specific YAML file
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_yaml(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(settings)
    }

    /// Load the first config file found in `dir`, falling back to defaults
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> DashResult<Settings> {
        match Self::find_config_file(dir.as_ref()) {
            Some(path) => Ok(Self::load_config(path)?),
            None => {
                debug!("No configuration file found, using defaults");
                let settings = Settings::default();
                settings.validate().map_err(ConfigError::from)?;
                Ok(settings)
            }
        }
    }

    /// Load configuration from the working directory
    pub fn load() -> DashResult<Settings> {
        Self::load_from_dir(".")
    }

    fn find_config_file(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let settings = ConfigLoader::from_yaml("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let yaml = r##"
data:
  ml_path: predictions.csv
charts:
  line_color: "#ff7f0e"
"##;
        let settings = ConfigLoader::from_yaml(yaml).unwrap();
        assert_eq!(settings.data.ml_path, "predictions.csv");
        assert_eq!(settings.data.human_path, crate::DEFAULT_HUMAN_PATH);
        assert_eq!(settings.charts.line_color, "#ff7f0e");
        assert_eq!(settings.charts.width, 960);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_color = "charts:\n  background_color: white\n";
        assert!(matches!(
            ConfigLoader::from_yaml(bad_color),
            Err(ConfigError::ValidationError(_))
        ));

        let bad_language = "i18n:\n  default_language: de\n";
        assert!(matches!(
            ConfigLoader::from_yaml(bad_language),
            Err(ConfigError::ValidationError(_))
        ));

        let bad_url = "links:\n  criteria_url: not-a-url\n";
        assert!(ConfigLoader::from_yaml(bad_url).is_err());

        let no_idle = "server:\n  session_idle_minutes: 0\n";
        assert!(matches!(
            ConfigLoader::from_yaml(no_idle),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        assert!(matches!(
            ConfigLoader::from_yaml("charts: [unclosed"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
