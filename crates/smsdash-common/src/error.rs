//! Error types and utilities for the dashboard

use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashError>;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A source file could not be opened or decoded
    #[error("Data error in {path}: {message}")]
    Data {
        message: String,
        path: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A source file was readable but did not have the expected shape
    #[error("Schema error in {path}{}: {message}", location(.row, .column))]
    Schema {
        message: String,
        path: String,
        row: Option<usize>,
        column: Option<String>,
    },

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internationalization and localization errors
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        locale: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

#[allow(clippy::ref_option)]
fn location(row: &Option<usize>, column: &Option<String>) -> String {
    match (row, column) {
        (Some(row), Some(column)) => format!(" (row {row}, column '{column}')"),
        (Some(row), None) => format!(" (row {row})"),
        (None, Some(column)) => format!(" (column '{column}')"),
        (None, None) => String::new(),
    }
}

impl DashError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new data error for the given file
    pub fn data(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Create a new data error for the given file with source
    pub fn data_with_source(
        path: impl Into<String>,
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Data {
            message: msg.into(),
            path: path.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a schema error that is not tied to a row
    pub fn schema(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Schema {
            message: msg.into(),
            path: path.into(),
            row: None,
            column: None,
        }
    }

    /// Create a schema error for a missing column
    pub fn missing_column(path: impl Into<String>, column: impl Into<String>) -> Self {
        let column = column.into();
        Self::Schema {
            message: format!("missing required column '{column}'"),
            path: path.into(),
            row: None,
            column: Some(column),
        }
    }

    /// Create a schema error for a single cell
    pub fn cell(
        path: impl Into<String>,
        row: usize,
        column: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Schema {
            message: msg.into(),
            path: path.into(),
            row: Some(row),
            column: Some(column.into()),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: None,
        }
    }

    /// Create a new localization error with locale
    pub fn localization_with_locale(msg: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: Some(locale.into()),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to DashError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for DashError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}
