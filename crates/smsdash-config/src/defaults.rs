//! Default values matching the dashboard's fixed deployment layout.

use crate::schema::{
    ChartSettings, DataSettings, I18nSettings, LinkSettings, LoggingSettings, ServerSettings,
    Settings,
};

/// Spreadsheet with the human-labeled campaign log.
pub const DEFAULT_HUMAN_PATH: &str = "Updated_EDITEED_Data.xlsx";

/// CSV with the ML timing predictions.
pub const DEFAULT_ML_PATH: &str = "DataBase_with_timing_predictions_final2.csv";

/// Companion criteria table linked from the sidebar.
pub const DEFAULT_CRITERIA_URL: &str =
    "https://table-de-criteres.streamlit.app/?embed_options=dark_theme";

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: DataSettings::default(),
            server: ServerSettings::default(),
            charts: ChartSettings::default(),
            i18n: I18nSettings::default(),
            links: LinkSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            human_path: DEFAULT_HUMAN_PATH.to_string(),
            ml_path: DEFAULT_ML_PATH.to_string(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8501".to_string(),
            session_cookie: "smsdash_session".to_string(),
            session_idle_minutes: 120,
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 960,
            height: 480,
            line_color: "#1f77b4".to_string(),
            background_color: "#ffffff".to_string(),
            point_size: 4,
        }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
        }
    }
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            criteria_url: DEFAULT_CRITERIA_URL.to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}
