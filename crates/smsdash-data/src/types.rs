//! Campaign record and metric types.

use chrono::{NaiveDateTime, Weekday};
use smsdash_common::{hour_and_weekday, weekday_name};
use std::collections::HashSet;
use std::fmt;

/// Column holding the business sector.
pub const SECTOR_COLUMN: &str = "Secteur";

/// Column holding the predicted message category.
pub const LABEL_COLUMN: &str = "label_predicted";

/// Which of the two campaign logs a table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Observed, human-labeled send events
    Human,
    /// Model-predicted send events and timings
    Ml,
}

impl Source {
    /// Column holding the timestamp `hour` and `day_of_week` derive from
    pub const fn timestamp_column(self) -> &'static str {
        match self {
            Self::Human => "full_date",
            Self::Ml => "predicted_best_time",
        }
    }

    /// Short lowercase name for logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Ml => "ml",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five numeric metrics carried by every campaign record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Unique click rate
    ClickRate,
    /// Opt-out (STOP) rate
    StopRate,
    /// Deliverability rate
    Deliverability,
    /// Cost per visit
    CostPerVisit,
    /// In-store visits
    StoreVisits,
}

impl Metric {
    /// All metrics, in column order
    pub const ALL: [Self; 5] = [
        Self::ClickRate,
        Self::StopRate,
        Self::Deliverability,
        Self::CostPerVisit,
        Self::StoreVisits,
    ];

    /// Source column header
    pub const fn column(self) -> &'static str {
        match self {
            Self::ClickRate => "Tx de clic unique",
            Self::StopRate => "Tx de stop",
            Self::Deliverability => "tx délivrabilité",
            Self::CostPerVisit => "CPV",
            Self::StoreVisits => "Visites en magasin",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// One value per [`Metric`]; `None` marks a missing cell or an empty mean.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics([Option<f64>; 5]);

impl Metrics {
    /// Build from values in [`Metric::ALL`] order
    pub const fn new(values: [Option<f64>; 5]) -> Self {
        Self(values)
    }

    /// Value of one metric
    pub const fn get(&self, metric: Metric) -> Option<f64> {
        self.0[metric.index()]
    }

    /// Replace the value of one metric
    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        self.0[metric.index()] = value;
    }
}

/// One send event from either log, with its derived calendar columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignRecord {
    pub sector: String,
    pub label: String,
    /// `full_date` for the human log, `predicted_best_time` for the ML log
    pub timestamp: NaiveDateTime,
    /// Hour of day, 0-23
    pub hour: u32,
    pub day_of_week: Weekday,
    pub metrics: Metrics,
}

impl CampaignRecord {
    /// Build a record, deriving `hour` and `day_of_week` from the timestamp
    pub fn new(
        sector: impl Into<String>,
        label: impl Into<String>,
        timestamp: NaiveDateTime,
        metrics: Metrics,
    ) -> Self {
        let (hour, day_of_week) = hour_and_weekday(&timestamp);
        Self {
            sector: sector.into(),
            label: label.into(),
            timestamp,
            hour,
            day_of_week,
            metrics,
        }
    }

    /// Full weekday name, e.g. `"Monday"`
    pub const fn day_name(&self) -> &'static str {
        weekday_name(self.day_of_week)
    }
}

/// A loaded campaign log.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignTable {
    pub source: Source,
    pub records: Vec<CampaignRecord>,
    /// Rows dropped because a grouping key cell was empty
    pub skipped_rows: usize,
}

impl CampaignTable {
    pub fn new(source: Source, records: Vec<CampaignRecord>) -> Self {
        Self {
            source,
            records,
            skipped_rows: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct sectors in order of first appearance
    pub fn sectors(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.sector.as_str()))
            .map(|r| r.sector.clone())
            .collect()
    }
}
