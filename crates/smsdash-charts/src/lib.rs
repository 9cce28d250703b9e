//! # SMS Dashboard Charts
//!
//! Draws the per-sector hourly metric line charts as SVG documents with
//! `plotters`.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod renderer;
pub mod series;
pub mod style;

pub use renderer::{
    ChartRenderer, ChartRequest, LineChartRenderer, RenderedChart, HOUR_RANGE, MAX_PLOT_MAGNITUDE,
    X_AXIS_LABEL,
};
pub use series::{hourly_means, sector_series, HourPoint};
pub use style::{parse_color, ChartStyle};
