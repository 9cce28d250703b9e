//! Startup-validated label tables.

use crate::bundle::{build_bundle, resolve};
use crate::error::I18nResult;
use crate::{LabelKey, Locale};
use tracing::info;

/// Resolved strings for one locale, indexed by [`LabelKey`].
#[derive(Debug, Clone)]
struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    fn build(locale: Locale) -> I18nResult<Self> {
        let bundle = build_bundle(locale)?;
        let labels = LabelKey::ALL
            .iter()
            .map(|&key| resolve(&bundle, locale, key))
            .collect::<I18nResult<Vec<_>>>()?;
        Ok(Self { labels })
    }

    fn get(&self, key: LabelKey) -> &str {
        // `build` resolves every key in `LabelKey::ALL` order.
        &self.labels[key.index()]
    }
}

/// Label lookup for every supported locale.
///
/// Construction fails if any locale lacks any [`LabelKey`]; once built, lookup
/// cannot fail.
#[derive(Debug, Clone)]
pub struct Translations {
    english: LabelTable,
    french: LabelTable,
}

impl Translations {
    /// Build and validate the tables for all locales
    pub fn new() -> I18nResult<Self> {
        let translations = Self {
            english: LabelTable::build(Locale::English)?,
            french: LabelTable::build(Locale::French)?,
        };
        info!(
            "Loaded {} labels for {} locales",
            LabelKey::ALL.len(),
            Locale::ALL.len()
        );
        Ok(translations)
    }

    /// Look up a label. Pure function of `(locale, key)`.
    pub fn get(&self, locale: Locale, key: LabelKey) -> &str {
        match locale {
            Locale::English => self.english.get(key),
            Locale::French => self.french.get(key),
        }
    }

    /// Lookup bound to one locale
    pub fn labels(&self, locale: Locale) -> Labels<'_> {
        Labels {
            translations: self,
            locale,
        }
    }
}

/// Borrowed view of the labels for a single locale.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    translations: &'a Translations,
    locale: Locale,
}

impl<'a> Labels<'a> {
    /// Look up a label in this view's locale
    pub fn get(&self, key: LabelKey) -> &'a str {
        self.translations.get(self.locale, key)
    }

    /// Locale of this view
    pub const fn locale(&self) -> Locale {
        self.locale
    }
}
