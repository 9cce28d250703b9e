//! Chart size and colors

use plotters::style::RGBColor;
use smsdash_config::ChartSettings;

/// Resolved drawing style for every dashboard chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub line_color: RGBColor,
    pub background_color: RGBColor,
    /// Marker radius in pixels
    pub point_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&ChartSettings::default())
    }
}

impl From<&ChartSettings> for ChartStyle {
    fn from(settings: &ChartSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            line_color: parse_color(&settings.line_color),
            background_color: parse_color(&settings.background_color),
            point_size: settings.point_size,
        }
    }
}

impl ChartStyle {
    /// Hex `#RRGGBB` form of the line color, for embedding in HTML
    pub fn line_color_hex(&self) -> String {
        let RGBColor(r, g, b) = self.line_color;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Parse a `#RRGGBB` string, falling back to black
pub fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}
