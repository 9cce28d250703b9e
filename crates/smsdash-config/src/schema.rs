//! Configuration schema definitions using serde with validation attributes.

use serde::{Deserialize, Serialize};
use smsdash_common::{LogFormat, LoggingConfig};
use validator::Validate;

/// Main configuration structure for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    /// Input datasets.
    #[validate]
    pub data: DataSettings,
    /// HTTP server.
    #[validate]
    pub server: ServerSettings,
    /// Chart rendering.
    #[validate]
    pub charts: ChartSettings,
    /// Localization.
    #[validate]
    pub i18n: I18nSettings,
    /// External links shown in the sidebar.
    #[validate]
    pub links: LinkSettings,
    /// Logging.
    #[validate]
    pub logging: LoggingSettings,
}

/// Locations of the two source datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DataSettings {
    /// Spreadsheet holding the human-labeled campaign log.
    #[validate(custom(function = "crate::validation::validate_file_path", message = "Invalid human dataset path"))]
    pub human_path: String,
    /// Delimited text file holding the ML prediction log.
    #[validate(custom(function = "crate::validation::validate_file_path", message = "Invalid ML dataset path"))]
    pub ml_path: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address to listen on, e.g. `127.0.0.1:8501`.
    #[validate(custom(function = "crate::validation::validate_socket_addr", message = "Bind address must be host:port"))]
    pub bind_address: String,
    /// Name of the cookie carrying the session id.
    #[validate(regex(path = "crate::validation::COOKIE_NAME_REGEX", message = "Cookie name must be alphanumeric, '-' or '_'"))]
    pub session_cookie: String,
    /// Minutes without a request before a session is dropped.
    #[validate(range(min = 1, max = 10080, message = "Session idle timeout must be between 1 and 10080 minutes"))]
    pub session_idle_minutes: u64,
}

/// Chart rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChartSettings {
    /// Chart width in pixels.
    #[validate(range(min = 200, max = 4000, message = "Width must be between 200 and 4000 pixels"))]
    pub width: u32,
    /// Chart height in pixels.
    #[validate(range(min = 150, max = 4000, message = "Height must be between 150 and 4000 pixels"))]
    pub height: u32,
    /// Line and marker color (hex format).
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Line color must be valid hex color"))]
    pub line_color: String,
    /// Background color (hex format).
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Background color must be valid hex color"))]
    pub background_color: String,
    /// Marker radius in pixels.
    #[validate(range(min = 1, max = 20, message = "Point size must be between 1 and 20"))]
    pub point_size: u32,
}

/// Localization configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct I18nSettings {
    /// Language a new session starts in.
    #[validate(custom(function = "crate::validation::validate_language", message = "Language must be one of: en, fr"))]
    pub default_language: String,
}

/// External link configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LinkSettings {
    /// Companion criteria table.
    #[validate(url(message = "Criteria URL must be a valid URL"))]
    pub criteria_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error).
    #[validate(custom(function = "crate::validation::validate_log_level", message = "Log level must be one of: trace, debug, info, warn, error"))]
    pub level: String,
    /// Output format (pretty, compact, json).
    #[validate(custom(function = "crate::validation::validate_log_format", message = "Log format must be one of: pretty, compact, json"))]
    pub format: String,
    /// Optional log file path.
    pub file: Option<String>,
}

impl LoggingSettings {
    /// Converts to the subscriber configuration used by `smsdash_common::init_logging`.
    pub fn to_logging_config(&self) -> LoggingConfig {
        let format = match self.format.as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        LoggingConfig {
            level: self.level.clone(),
            format,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}
