//! Hourly series extraction

use smsdash_data::{AggregateBucket, AggregateTable, Metric};
use std::collections::BTreeMap;

/// One plotted point: hour of day and metric value.
pub type HourPoint = (u32, f64);

/// Mean of the bucket values at each hour, sorted by hour.
///
/// Buckets whose mean is missing for `metric` do not contribute.
#[allow(clippy::cast_precision_loss)]
pub fn hourly_means<'a>(
    buckets: impl IntoIterator<Item = &'a AggregateBucket>,
    metric: Metric,
) -> Vec<HourPoint> {
    let mut by_hour: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for bucket in buckets {
        if let Some(value) = bucket.means.get(metric) {
            let entry = by_hour.entry(bucket.key.hour).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    by_hour
        .into_iter()
        .map(|(hour, (sum, count))| (hour, sum / count as f64))
        .collect()
}

/// Hourly series of one sector of a table
pub fn sector_series(table: &AggregateTable, sector: &str, metric: Metric) -> Vec<HourPoint> {
    hourly_means(table.for_sector(sector), metric)
}
