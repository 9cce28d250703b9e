//! The closed set of UI labels.

/// Every label the dashboard displays.
///
/// Each variant maps to one Fluent message id; a locale that lacks any of them
/// fails when the label table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    Title,
    LanguageHeader,
    SelectSector,
    Sector,
    HumanAnalysis,
    MlAnalysis,
    PromoMetricsHuman,
    PromoMetricsMl,
    ClickRate,
    StopRate,
    VisitInStore,
    VisitCriteriaTable,
    NoSectors,
    ErrorTitle,
}

impl LabelKey {
    /// All keys, in table order
    pub const ALL: [Self; 14] = [
        Self::Title,
        Self::LanguageHeader,
        Self::SelectSector,
        Self::Sector,
        Self::HumanAnalysis,
        Self::MlAnalysis,
        Self::PromoMetricsHuman,
        Self::PromoMetricsMl,
        Self::ClickRate,
        Self::StopRate,
        Self::VisitInStore,
        Self::VisitCriteriaTable,
        Self::NoSectors,
        Self::ErrorTitle,
    ];

    /// Fluent message id
    pub const fn message_id(self) -> &'static str {
        match self {
            Self::Title => "dashboard-title",
            Self::LanguageHeader => "language-header",
            Self::SelectSector => "select-sector",
            Self::Sector => "sector",
            Self::HumanAnalysis => "human-analysis",
            Self::MlAnalysis => "ml-analysis",
            Self::PromoMetricsHuman => "promo-sms-metrics-human",
            Self::PromoMetricsMl => "promo-sms-metrics-ml",
            Self::ClickRate => "click-rate",
            Self::StopRate => "stop-rate",
            Self::VisitInStore => "visit-in-store",
            Self::VisitCriteriaTable => "visit-criteria-table",
            Self::NoSectors => "no-sectors",
            Self::ErrorTitle => "error-title",
        }
    }

    /// Position in [`LabelKey::ALL`]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}
