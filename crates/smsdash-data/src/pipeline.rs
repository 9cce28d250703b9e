//! Load, aggregate and filter both campaign logs

use crate::aggregator::{aggregate_source, AggregateTable};
use crate::filter::promotional;
use crate::loader::{load_human, load_ml};
use crate::types::CampaignTable;
use smsdash_common::Result;
use smsdash_config::DataSettings;
use tracing::{info, instrument};

/// Every table the dashboard draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    /// All human buckets, any label
    pub human: AggregateTable,
    /// Promotional human buckets
    pub human_promo: AggregateTable,
    /// Promotional ML buckets, split by predicted best time
    pub ml_promo: AggregateTable,
    /// Sectors offered in the picker, from the full human table in row order
    pub sectors: Vec<String>,
}

impl DashboardData {
    /// Build from already loaded tables
    pub fn from_tables(human: &CampaignTable, ml: &CampaignTable) -> Self {
        let sectors = human.sectors();
        let human = aggregate_source(human);
        let ml = aggregate_source(ml);
        let human_promo = promotional(&human);
        let ml_promo = promotional(&ml);

        Self {
            human,
            human_promo,
            ml_promo,
            sectors,
        }
    }

    /// Run the whole pipeline from the configured files
    #[instrument(skip_all, fields(human = %settings.human_path, ml = %settings.ml_path))]
    pub fn load(settings: &DataSettings) -> Result<Self> {
        let human = load_human(&settings.human_path)?;
        let ml = load_ml(&settings.ml_path)?;
        let data = Self::from_tables(&human, &ml);

        info!(
            "Dashboard data ready: {} sectors, {} human and {} ML promotional buckets",
            data.sectors.len(),
            data.human_promo.len(),
            data.ml_promo.len()
        );
        Ok(data)
    }

    /// The sector to show: the requested one if known, else the first
    pub fn resolve_sector<'a>(&'a self, requested: Option<&str>) -> Option<&'a str> {
        requested
            .and_then(|s| self.sectors.iter().find(|known| known.as_str() == s))
            .or_else(|| self.sectors.first())
            .map(String::as_str)
    }
}
