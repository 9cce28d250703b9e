//! # SMS Dashboard Config
//!
//! YAML configuration for the dashboard: input paths, server binding, chart
//! styling, default language, external links and logging.
//!
//! Every field has a default, so a missing config file yields the fixed
//! deployment layout. Values are validated with `validator` on load.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use defaults::{DEFAULT_CRITERIA_URL, DEFAULT_HUMAN_PATH, DEFAULT_ML_PATH};
pub use loader::{ConfigError, ConfigLoader};
pub use schema::*;
