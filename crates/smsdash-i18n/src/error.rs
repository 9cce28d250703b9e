//! Error types for internationalization operations

use smsdash_common::DashError;
use thiserror::Error;

/// Errors that can occur while building the label tables
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource for {locale}: {errors:?}")]
    FluentParseError { locale: String, errors: Vec<String> },

    /// Failed to add a resource to a bundle
    #[error("Failed to add resource for {locale}: {errors:?}")]
    BundleError { locale: String, errors: Vec<String> },

    /// A label key has no message in a locale
    #[error("Message '{key}' missing for locale {locale}")]
    MessageNotFound { key: String, locale: String },

    /// Failed to format a message
    #[error("Failed to format message '{key}' for locale {locale}: {errors:?}")]
    MessageFormatError {
        key: String,
        locale: String,
        errors: Vec<String>,
    },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for DashError {
    fn from(err: I18nError) -> Self {
        match &err {
            I18nError::FluentParseError { locale, .. }
            | I18nError::BundleError { locale, .. }
            | I18nError::MessageNotFound { locale, .. }
            | I18nError::MessageFormatError { locale, .. } => {
                DashError::localization_with_locale(err.to_string(), locale.clone())
            }
            I18nError::InvalidLanguageId(_) => DashError::localization(err.to_string()),
        }
    }
}
