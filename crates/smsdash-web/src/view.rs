//! Dashboard view model
//!
//! [`render`] turns session state and already-loaded data into a [`Page`].
//! It performs no I/O, so switching language re-renders the same data.

use crate::session::SessionState;
use smsdash_charts::{ChartRenderer, ChartRequest, RenderedChart};
use smsdash_common::Result;
use smsdash_data::{AggregateTable, DashboardData, Metric};
use smsdash_i18n::{LabelKey, Labels, Locale, Translations};

/// Metrics charted in each section, with their axis label.
///
/// The in-store-visit chart plots cost per visit.
pub const CHART_METRICS: [(Metric, LabelKey); 3] = [
    (Metric::ClickRate, LabelKey::ClickRate),
    (Metric::StopRate, LabelKey::StopRate),
    (Metric::CostPerVisit, LabelKey::VisitInStore),
];

/// Inputs to [`render`] that are fixed for the life of the server.
pub struct ViewContext<'a> {
    pub criteria_url: &'a str,
    pub renderer: &'a dyn ChartRenderer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub language: Locale,
    pub title: String,
    pub sidebar: Sidebar,
    /// `"Sector: <name>"`
    pub sector_header: String,
    pub notice: Option<String>,
    /// Human analysis first, then ML analysis
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub language_header: String,
    pub languages: Vec<LanguageButton>,
    pub sector_label: String,
    pub sectors: Vec<SectorOption>,
    pub criteria_link: Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageButton {
    pub locale: Locale,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorOption {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    /// Absent when no sector is selected
    pub metrics_heading: Option<String>,
    pub charts: Vec<RenderedChart>,
}

impl Page {
    pub fn charts(&self) -> impl Iterator<Item = &RenderedChart> {
        self.sections.iter().flat_map(|s| s.charts.iter())
    }
}

fn section(
    labels: Labels<'_>,
    renderer: &dyn ChartRenderer,
    table: &AggregateTable,
    sector: Option<&str>,
    heading: LabelKey,
    metrics_heading: LabelKey,
) -> Result<Section> {
    let heading = labels.get(heading).to_string();
    let Some(sector) = sector else {
        return Ok(Section {
            heading,
            metrics_heading: None,
            charts: Vec::new(),
        });
    };

    let metrics_heading = labels.get(metrics_heading);
    let charts = CHART_METRICS
        .iter()
        .map(|&(metric, y_label)| {
            renderer.render_metric(
                table,
                &ChartRequest {
                    sector: sector.to_string(),
                    metric,
                    title: format!("{metrics_heading} - {sector}"),
                    y_label: labels.get(y_label).to_string(),
                },
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Section {
        heading,
        metrics_heading: Some(metrics_heading.to_string()),
        charts,
    })
}

/// Build the dashboard page for one session.
pub fn render(
    state: &SessionState,
    data: &DashboardData,
    translations: &Translations,
    ctx: &ViewContext<'_>,
) -> Result<Page> {
    let labels = translations.labels(state.language);
    let sector = data.resolve_sector(state.sector.as_deref());

    let sidebar = Sidebar {
        language_header: labels.get(LabelKey::LanguageHeader).to_string(),
        languages: Locale::ALL
            .iter()
            .map(|&locale| LanguageButton {
                locale,
                label: locale.display_name(),
                active: locale == state.language,
            })
            .collect(),
        sector_label: labels.get(LabelKey::SelectSector).to_string(),
        sectors: data
            .sectors
            .iter()
            .map(|name| SectorOption {
                name: name.clone(),
                selected: Some(name.as_str()) == sector,
            })
            .collect(),
        criteria_link: Link {
            label: labels.get(LabelKey::VisitCriteriaTable).to_string(),
            url: ctx.criteria_url.to_string(),
        },
    };

    let sections = vec![
        section(
            labels,
            ctx.renderer,
            &data.human_promo,
            sector,
            LabelKey::HumanAnalysis,
            LabelKey::PromoMetricsHuman,
        )?,
        section(
            labels,
            ctx.renderer,
            &data.ml_promo,
            sector,
            LabelKey::MlAnalysis,
            LabelKey::PromoMetricsMl,
        )?,
    ];

    Ok(Page {
        language: state.language,
        title: labels.get(LabelKey::Title).to_string(),
        sidebar,
        sector_header: format!("{}: {}", labels.get(LabelKey::Sector), sector.unwrap_or("")),
        notice: sector
            .is_none()
            .then(|| labels.get(LabelKey::NoSectors).to_string()),
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Event;
    use smsdash_charts::LineChartRenderer;
    use smsdash_common::parse_timestamp;
    use smsdash_config::DEFAULT_CRITERIA_URL;
    use smsdash_data::{CampaignRecord, CampaignTable, Metrics, Source};

    fn record(sector: &str, label: &str, ts: &str, click: f64) -> CampaignRecord {
        CampaignRecord::new(
            sector,
            label,
            parse_timestamp(ts).unwrap(),
            Metrics::new([Some(click), Some(0.01), Some(0.9), Some(2.0), Some(10.0)]),
        )
    }

    fn data() -> DashboardData {
        let human = CampaignTable::new(
            Source::Human,
            vec![
                record("Retail", "promotion", "2024-03-04 18:00", 0.1),
                record("Retail", "promotion", "2024-03-04 18:30", 0.3),
                record("Food", "information", "2024-03-04 10:00", 0.5),
            ],
        );
        // No promotional ML rows for Retail
        let ml = CampaignTable::new(
            Source::Ml,
            vec![record("Food", "promotion", "2024-03-04 15:30", 0.2)],
        );
        DashboardData::from_tables(&human, &ml)
    }

    fn render_with(state: &SessionState, data: &DashboardData) -> Page {
        let translations = Translations::new().unwrap();
        let renderer = LineChartRenderer::default();
        let ctx = ViewContext {
            criteria_url: DEFAULT_CRITERIA_URL,
            renderer: &renderer,
        };
        render(state, data, &translations, &ctx).unwrap()
    }

    #[test]
    fn test_default_page_uses_first_sector() {
        let page = render_with(&SessionState::default(), &data());

        assert_eq!(page.title, "SMS Campaign Dashboard");
        assert_eq!(page.sector_header, "Sector: Retail");
        assert_eq!(page.sidebar.sectors.len(), 2);
        assert!(page.sidebar.sectors[0].selected);
        assert_eq!(page.sidebar.criteria_link.url, DEFAULT_CRITERIA_URL);
        assert!(page.notice.is_none());
    }

    #[test]
    fn test_six_charts_in_two_sections() {
        let state = SessionState::default().apply(Event::SelectSector("Retail".to_string()));
        let page = render_with(&state, &data());

        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].heading, "Human Analysis");
        assert_eq!(page.sections[1].heading, "ML Analysis");
        assert_eq!(page.charts().count(), 6);

        let human = &page.sections[0];
        assert_eq!(
            human.charts[0].title,
            "Promotional SMS Metrics (Human Analysis) - Retail"
        );
        assert_eq!(human.charts[0].points.len(), 1);
        assert!((human.charts[0].points[0].1 - 0.2).abs() < 1e-12);

        // Sector with zero promotional ML rows renders blank charts
        assert!(page.sections[1].charts.iter().all(RenderedChart::is_blank));
    }

    #[test]
    fn test_language_switch_relabels_same_data() {
        let data = data();
        let english = SessionState::default().apply(Event::SelectSector("Retail".to_string()));
        let french = english.clone().apply(Event::SetLanguage(Locale::French));

        let en = render_with(&english, &data);
        let fr = render_with(&french, &data);

        assert_eq!(fr.title, "Tableau de Bord des Campagnes SMS");
        assert_eq!(fr.sector_header, "Secteur: Retail");
        assert_eq!(fr.sidebar.sector_label, "Sélectionner un Secteur");
        assert_eq!(fr.sidebar.criteria_link.label, "Visite la Table de Critères");
        assert_eq!(fr.sections[1].heading, "Analyse IA");
        assert!(fr.sidebar.languages[1].active);
        assert!(!fr.sidebar.languages[0].active);

        // Same plotted points, only labels differ
        let en_points: Vec<_> = en.charts().map(|c| c.points.clone()).collect();
        let fr_points: Vec<_> = fr.charts().map(|c| c.points.clone()).collect();
        assert_eq!(en_points, fr_points);
        assert_ne!(en.sections[0].charts[0].title, fr.sections[0].charts[0].title);
    }

    #[test]
    fn test_no_sectors() {
        let empty = DashboardData::from_tables(
            &CampaignTable::new(Source::Human, Vec::new()),
            &CampaignTable::new(Source::Ml, Vec::new()),
        );
        let page = render_with(&SessionState::default(), &empty);

        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.charts().count(), 0);
        assert!(page.sections.iter().all(|s| s.metrics_heading.is_none()));
        assert_eq!(
            page.notice.as_deref(),
            Some("No sector found in the human analysis data.")
        );
    }
}
