//! Internationalization support for the SMS campaign dashboard
//!
//! Labels are a closed [`LabelKey`] enum resolved from bundled Fluent files
//! into per-locale tables when [`Translations::new`] runs. The build script
//! rejects locale files whose key sets differ, and construction rejects any
//! key missing from a locale, so lookups never fail at runtime.
//!
//! # Example
//!
//! ```rust
//! use smsdash_i18n::{LabelKey, Locale, Translations};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let translations = Translations::new()?;
//! assert_eq!(translations.get(Locale::French, LabelKey::Sector), "Secteur");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod bundle;
pub mod error;
pub mod keys;
pub mod locale;
pub mod translations;

pub use error::{I18nError, I18nResult};
pub use keys::LabelKey;
pub use locale::Locale;
pub use translations::{Labels, Translations};
