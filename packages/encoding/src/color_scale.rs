//! Temperature color scales.
//!
//! The map and the bar chart both color by temperature but at different
//! granularity. Each policy is a named [`ColorScale`] so encoders can be
//! parameterized over it.

use weather_dash_encoding_models::Color;

/// Maps a temperature in °C (or its absence) to a color.
pub trait ColorScale {
    /// Returns the color for `temp`. Must be total and deterministic.
    fn color_for(&self, temp: Option<f64>) -> Color;
}

/// Eight-band scale used by the map, plus a gray band for missing data.
///
/// Bands are closed on their lower bound: exactly 30.0 is red.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemperatureColorScale;

impl TemperatureColorScale {
    /// Color for a missing (or `NaN`) temperature.
    pub const NO_DATA: Color = Color::from_static("#808080");

    /// Lower bound and color of each band, hottest first.
    pub const BANDS: [(f64, Color); 7] = [
        (30.0, Color::from_static("#FF0000")),
        (25.0, Color::from_static("#FF4500")),
        (20.0, Color::from_static("#FFA500")),
        (15.0, Color::from_static("#FFD700")),
        (10.0, Color::from_static("#ADFF2F")),
        (5.0, Color::from_static("#00CED1")),
        (0.0, Color::from_static("#1E90FF")),
    ];

    /// Color for anything below the coldest band.
    pub const BELOW_FREEZING: Color = Color::from_static("#0000FF");
}

impl ColorScale for TemperatureColorScale {
    fn color_for(&self, temp: Option<f64>) -> Color {
        let Some(temp) = temp.filter(|t| !t.is_nan()) else {
            return Self::NO_DATA;
        };

        Self::BANDS
            .iter()
            .find(|(lower, _)| temp >= *lower)
            .map_or(Self::BELOW_FREEZING, |(_, color)| color.clone())
    }
}

/// Three-band scale used by the temperature bar chart.
///
/// Thresholds are exclusive: a bar must be strictly above 25 to be red.
/// Missing values fall through to blue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarTemperatureScale;

impl BarTemperatureScale {
    pub const HOT: Color = Color::from_static("#FF6384");
    pub const WARM: Color = Color::from_static("#FFCE56");
    pub const COOL: Color = Color::from_static("#36A2EB");
}

impl ColorScale for BarTemperatureScale {
    fn color_for(&self, temp: Option<f64>) -> Color {
        match temp {
            Some(t) if t > 25.0 => Self::HOT,
            Some(t) if t > 15.0 => Self::WARM,
            _ => Self::COOL,
        }
    }
}

/// Fixed categorical palette for the condition pie chart.
pub const CATEGORICAL_PALETTE: [Color; 10] = [
    Color::from_static("#FF6384"),
    Color::from_static("#36A2EB"),
    Color::from_static("#FFCE56"),
    Color::from_static("#4BC0C0"),
    Color::from_static("#9966FF"),
    Color::from_static("#FF9F40"),
    Color::from_static("#FF6384"),
    Color::from_static("#C9CBCF"),
    Color::from_static("#7BC225"),
    Color::from_static("#F7464A"),
];

/// Palette color for position `index`, cycling past the end.
#[must_use]
pub fn categorical_color(index: usize) -> Color {
    CATEGORICAL_PALETTE[index % CATEGORICAL_PALETTE.len()].clone()
}
