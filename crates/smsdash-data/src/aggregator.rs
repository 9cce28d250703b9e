//! Group-by-mean aggregation of campaign records

use crate::types::{CampaignRecord, CampaignTable, Metric, Metrics, Source};
use chrono::{NaiveDateTime, Weekday};
use smsdash_common::weekday_name;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Which columns form the grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// sector, label, day of week, hour
    Standard,
    /// `Standard` plus the exact predicted timestamp
    WithBestTime,
}

impl Grouping {
    /// Grouping used for each source log
    pub const fn for_source(source: Source) -> Self {
        match source {
            Source::Human => Self::Standard,
            Source::Ml => Self::WithBestTime,
        }
    }
}

/// Grouping key of one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub sector: String,
    pub label: String,
    pub day_of_week: Weekday,
    pub hour: u32,
    /// Only set under [`Grouping::WithBestTime`]
    pub best_time: Option<NaiveDateTime>,
}

impl BucketKey {
    fn from_record(record: &CampaignRecord, grouping: Grouping) -> Self {
        Self {
            sector: record.sector.clone(),
            label: record.label.clone(),
            day_of_week: record.day_of_week,
            hour: record.hour,
            best_time: match grouping {
                Grouping::Standard => None,
                Grouping::WithBestTime => Some(record.timestamp),
            },
        }
    }

    fn sort_key(&self) -> (&str, &str, u32, u32, Option<NaiveDateTime>) {
        (
            &self.sector,
            &self.label,
            self.day_of_week.num_days_from_monday(),
            self.hour,
            self.best_time,
        )
    }

    pub const fn day_name(&self) -> &'static str {
        weekday_name(self.day_of_week)
    }
}

/// Mean metrics of all records sharing a key.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateBucket {
    pub key: BucketKey,
    /// `None` where every record in the bucket lacked the metric
    pub means: Metrics,
    /// Records in the bucket
    pub count: usize,
}

/// Result of aggregating one campaign log.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateTable {
    pub source: Source,
    pub grouping: Grouping,
    /// Sorted by sector, label, weekday (Monday first), hour, best time
    pub buckets: Vec<AggregateBucket>,
}

impl AggregateTable {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets of one sector, in table order
    pub fn for_sector<'a>(&'a self, sector: &'a str) -> impl Iterator<Item = &'a AggregateBucket> {
        self.buckets.iter().filter(move |b| b.key.sector == sector)
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    sums: [f64; 5],
    counts: [usize; 5],
    records: usize,
}

impl Accumulator {
    fn add(&mut self, metrics: &Metrics) {
        self.records += 1;
        for metric in Metric::ALL {
            if let Some(value) = metrics.get(metric) {
                self.sums[metric.index()] += value;
                self.counts[metric.index()] += 1;
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn means(&self) -> Metrics {
        let mut means = Metrics::default();
        for metric in Metric::ALL {
            let i = metric.index();
            if self.counts[i] > 0 {
                means.set(metric, Some(self.sums[i] / self.counts[i] as f64));
            }
        }
        means
    }
}

/// Group records and average every metric, skipping missing values.
#[instrument(skip(table), fields(source = %table.source, records = table.len()))]
pub fn aggregate(table: &CampaignTable, grouping: Grouping) -> AggregateTable {
    let mut groups: HashMap<BucketKey, Accumulator> = HashMap::new();

    for record in &table.records {
        groups
            .entry(BucketKey::from_record(record, grouping))
            .or_default()
            .add(&record.metrics);
    }

    let mut buckets: Vec<AggregateBucket> = groups
        .into_iter()
        .map(|(key, acc)| AggregateBucket {
            means: acc.means(),
            count: acc.records,
            key,
        })
        .collect();
    buckets.sort_by(|a, b| a.key.sort_key().cmp(&b.key.sort_key()));

    debug!("Aggregated into {} buckets", buckets.len());

    AggregateTable {
        source: table.source,
        grouping,
        buckets,
    }
}

/// Aggregate with the grouping that belongs to the table's source
pub fn aggregate_source(table: &CampaignTable) -> AggregateTable {
    aggregate(table, Grouping::for_source(table.source))
}
