//! Label filtering of aggregate tables

use crate::aggregator::AggregateTable;

/// Label of promotional campaigns.
pub const PROMOTION_LABEL: &str = "promotion";

/// Keep only buckets whose label equals `label` exactly
pub fn by_label(table: &AggregateTable, label: &str) -> AggregateTable {
    AggregateTable {
        source: table.source,
        grouping: table.grouping,
        buckets: table
            .buckets
            .iter()
            .filter(|b| b.key.label == label)
            .cloned()
            .collect(),
    }
}

/// Keep only promotional buckets. Matching is case-sensitive.
pub fn promotional(table: &AggregateTable) -> AggregateTable {
    by_label(table, PROMOTION_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{aggregate, Grouping};
    use crate::types::{CampaignRecord, CampaignTable, Metrics, Source};
    use smsdash_common::parse_timestamp;

    fn table(labels: &[&str]) -> AggregateTable {
        let records = labels
            .iter()
            .map(|label| {
                CampaignRecord::new(
                    "Retail",
                    *label,
                    parse_timestamp("2024-03-04 18:00").unwrap(),
                    Metrics::default(),
                )
            })
            .collect();
        aggregate(&CampaignTable::new(Source::Human, records), Grouping::Standard)
    }

    #[test]
    fn test_keeps_only_exact_promotion() {
        let filtered = promotional(&table(&["promotion", "Promotion", "information", "promotions"]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.buckets[0].key.label, "promotion");
    }

    #[test]
    fn test_no_promotional_rows() {
        let filtered = promotional(&table(&["information"]));
        assert!(filtered.is_empty());
        assert_eq!(filtered.source, Source::Human);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = promotional(&table(&["promotion", "information"]));
        assert_eq!(promotional(&once), once);
    }
}
