//! Locale management and utilities

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Supported locales
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    French,
}

impl Locale {
    /// Every supported locale, in display order
    pub const ALL: [Self; 2] = [Self::English, Self::French];

    /// Get the language code for this locale
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::French => "fr-FR",
        }
    }

    /// Get the short language code for this locale
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }

    /// Parse a locale from a language code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" | "en-US" => Some(Self::English),
            "fr" | "fr-FR" => Some(Self::French),
            _ => None,
        }
    }

    /// Convert to Fluent LanguageIdentifier
    pub fn to_language_identifier(self) -> I18nResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.code().to_string()))
    }

    /// Name of the language in that language, used on the toggle buttons
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::French => "Français",
        }
    }

    /// Bundled Fluent source for this locale
    pub(crate) const fn source(self) -> &'static str {
        match self {
            Self::English => include_str!("../locales/en/main.ftl"),
            Self::French => include_str!("../locales/fr/main.ftl"),
        }
    }
}
