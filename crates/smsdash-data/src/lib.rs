//! Campaign data pipeline for the SMS dashboard.
//!
//! Loads the human-labeled spreadsheet and the ML prediction CSV, averages
//! every metric per sector, label, weekday and hour, and keeps the
//! promotional buckets the charts are drawn from.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod filter;
pub mod loader;
pub mod pipeline;
pub mod types;

pub use aggregator::{aggregate, aggregate_source, AggregateBucket, AggregateTable, BucketKey, Grouping};
pub use filter::{by_label, promotional, PROMOTION_LABEL};
pub use loader::{load_human, load_ml, load_table, Cell, FileFormat, RawTable};
pub use pipeline::DashboardData;
pub use types::{CampaignRecord, CampaignTable, Metric, Metrics, Source, LABEL_COLUMN, SECTOR_COLUMN};
