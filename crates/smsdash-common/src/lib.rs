//! # SMS Dashboard Common
//!
//! Shared error type, logging bootstrap, and calendar helpers used by every
//! crate in the dashboard workspace.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod time;

#[cfg(feature = "testing")]
pub mod test_utils;

pub use error::{DashError, Result};
pub use logging::{init_default_logging, init_logging, LogFormat, LoggingConfig};
pub use time::{hour_and_weekday, parse_timestamp, weekday_name};
