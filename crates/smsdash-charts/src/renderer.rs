//! Line chart rendering to SVG

use crate::series::{sector_series, HourPoint};
use crate::style::ChartStyle;
use plotters::prelude::*;
use smsdash_common::Result;
use smsdash_data::{AggregateTable, Metric};
use tracing::{debug, warn};

/// Label of the x axis on every chart.
pub const X_AXIS_LABEL: &str = "Hour";

/// First and last hour on the x axis.
pub const HOUR_RANGE: (i32, i32) = (0, 23);

/// Largest magnitude drawn; keeps the padded span finite.
pub const MAX_PLOT_MAGNITUDE: f64 = f64::MAX / 4.0;

/// What to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub sector: String,
    pub metric: Metric,
    pub title: String,
    pub y_label: String,
}

/// A drawn chart plus the points it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub title: String,
    /// Standalone `<svg>` document
    pub svg: String,
    /// Plotted (hour, value) points, sorted by hour; empty for blank axes
    pub points: Vec<HourPoint>,
}

impl RenderedChart {
    pub fn is_blank(&self) -> bool {
        self.points.is_empty()
    }
}

/// Trait for drawing one metric chart
pub trait ChartRenderer {
    /// Draw `points` under the request's title and y label
    fn render(&self, request: &ChartRequest, points: &[HourPoint]) -> Result<RenderedChart>;

    /// Select the sector from a filtered table and draw the metric by hour.
    ///
    /// A sector with no rows yields blank axes rather than an error.
    fn render_metric(&self, table: &AggregateTable, request: &ChartRequest) -> Result<RenderedChart> {
        let points = sector_series(table, &request.sector, request.metric);
        self.render(request, &points)
    }
}

/// Renders a single line series with point markers.
#[derive(Debug, Clone, Default)]
pub struct LineChartRenderer {
    style: ChartStyle,
}

impl LineChartRenderer {
    pub const fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Points that can be placed on a finite axis
    fn plottable(points: &[HourPoint]) -> Vec<HourPoint> {
        points
            .iter()
            .copied()
            .filter(|&(_, y)| y.is_finite() && y.abs() <= MAX_PLOT_MAGNITUDE)
            .collect()
    }

    /// Y range with 5% padding. Blank charts use 0..1.
    fn calculate_y_range(points: &[HourPoint]) -> (f64, f64) {
        let (y_min, y_max) = points
            .iter()
            .filter(|&&(_, y)| y.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        if y_min > y_max {
            return (0.0, 1.0);
        }

        let span = y_max - y_min;
        let padding = if span > 0.0 {
            span * 0.05
        } else {
            (y_max.abs() * 0.05).max(0.05)
        };

        let (lo, hi) = (y_min - padding, y_max + padding);
        if (hi - lo).is_finite() {
            (lo, hi)
        } else {
            (0.0, 1.0)
        }
    }
}

impl ChartRenderer for LineChartRenderer {
    fn render(&self, request: &ChartRequest, points: &[HourPoint]) -> Result<RenderedChart> {
        let plotted = Self::plottable(points);
        if plotted.len() < points.len() {
            warn!(
                "Dropped {} out-of-range points from '{}'",
                points.len() - plotted.len(),
                request.title
            );
        }
        let points = plotted.as_slice();

        let (y_min, y_max) = Self::calculate_y_range(points);
        let data: Vec<(i32, f64)> = points
            .iter()
            .map(|&(hour, value)| (i32::try_from(hour).unwrap_or(HOUR_RANGE.1), value))
            .collect();

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.style.width, self.style.height))
                .into_drawing_area();
            root.fill(&self.style.background_color)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&request.title, ("sans-serif", 20))
                .margin(12)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(HOUR_RANGE.0..HOUR_RANGE.1, y_min..y_max)?;

            chart
                .configure_mesh()
                .x_labels(24)
                .x_desc(X_AXIS_LABEL)
                .y_desc(&request.y_label)
                .draw()?;

            if !data.is_empty() {
                let color = self.style.line_color;
                chart.draw_series(LineSeries::new(
                    data.iter().copied(),
                    ShapeStyle::from(&color).stroke_width(2),
                ))?;
                chart.draw_series(
                    data.iter()
                        .map(|&point| Circle::new(point, self.style.point_size, color.filled())),
                )?;
            }

            root.present()?;
        }

        debug!(
            "Rendered '{}' for sector {} with {} points",
            request.title,
            request.sector,
            points.len()
        );

        Ok(RenderedChart {
            title: request.title.clone(),
            svg,
            points: points.to_vec(),
        })
    }
}
