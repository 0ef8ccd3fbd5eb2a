#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Visual encoding types produced by the dashboard encoders.
//!
//! A [`ChartDataset`] feeds one chart, a [`MarkerVisual`] describes one
//! map marker, and the [`map`] module holds the per-map-instance
//! configuration (camera, tiles, marker icon). All of these serialize to
//! camelCase JSON for the browser.

pub mod map;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A CSS color string (`#RRGGBB` or a short `#RGB` form).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Creates a color from a string literal. Usable in `const` palettes.
    #[must_use]
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Returns the CSS representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label/value/color triple consumed by a charting surface.
///
/// The three sequences always have the same length and index `i` of each
/// describes the same slice or bar. Entries can only be appended through
/// [`ChartDataset::push`], which keeps them aligned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    labels: Vec<String>,
    values: Vec<Option<f64>>,
    colors: Vec<Color>,
}

impl ChartDataset {
    /// Creates an empty dataset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Creates an empty dataset with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    /// Appends one entry to all three sequences.
    pub fn push(&mut self, label: impl Into<String>, value: Option<f64>, color: Color) {
        self.labels.push(label.into());
        self.values.push(value);
        self.colors.push(color);
    }

    /// Entry labels, in display order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Entry values. `None` marks an entry with no data.
    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Entry colors.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the dataset has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether the three sequences have equal length. Always true for
    /// datasets built with [`ChartDataset::push`]; a deserialized dataset
    /// may violate it.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.labels.len() == self.values.len() && self.labels.len() == self.colors.len()
    }
}

/// Geometry and style of one country marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerVisual {
    /// Country name identifying the marker.
    pub country_key: String,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Circle radius in screen pixels, within `[5, 30]`.
    pub radius_pixels: f64,
    /// Fill color from the map temperature scale.
    pub fill_color: Color,
    /// HTML shown in the marker popup.
    pub popup_html: String,
}

/// Coarse temperature class used as a CSS class name in tables and the
/// selected-country panel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TemperatureClass {
    /// Below 10 °C, or unknown.
    Cold,
    /// 10 °C up to 20 °C.
    Mild,
    /// 20 °C up to 30 °C.
    Warm,
    /// 30 °C and above.
    Hot,
}

impl TemperatureClass {
    /// Classifies a temperature in °C. Missing or `NaN` values are `Cold`.
    #[must_use]
    pub fn from_celsius(temp: Option<f64>) -> Self {
        match temp {
            Some(t) if t >= 30.0 => Self::Hot,
            Some(t) if t >= 20.0 => Self::Warm,
            Some(t) if t >= 10.0 => Self::Mild,
            _ => Self::Cold,
        }
    }
}

/// A chart ready for rendering: title, series label, and data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    /// Chart title.
    pub title: String,
    /// Legend label for the single data series.
    pub series_label: String,
    /// Encoded data.
    pub dataset: ChartDataset,
}

/// One headline figure on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    /// Card caption.
    pub label: String,
    /// Formatted value, `"N/A"` when missing.
    pub value: String,
}

/// A row in the hottest/coldest location tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRow {
    /// Location name.
    pub location: String,
    /// Country name.
    pub country: String,
    /// Temperature formatted to one decimal with unit, or `"N/A"`.
    pub temperature: String,
    /// Condition text.
    pub condition: String,
    /// Temperature class for styling.
    pub temperature_class: TemperatureClass,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Headline figures, in display order.
    pub summary: Vec<SummaryCard>,
    /// Pie chart of the condition distribution.
    pub conditions: ChartView,
    /// Bar chart of average temperature per country.
    pub temperature_by_country: ChartView,
    /// Hottest observations.
    pub hottest: Vec<LocationRow>,
    /// Coldest observations.
    pub coldest: Vec<LocationRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_sequences_aligned() {
        let mut dataset = ChartDataset::new();
        assert!(dataset.is_empty());

        dataset.push("Sunny", Some(5.0), Color::from_static("#FF6384"));
        dataset.push("Rain", None, Color::from_static("#36A2EB"));

        assert_eq!(dataset.len(), 2);
        assert!(dataset.is_aligned());
        assert_eq!(dataset.labels()[1], "Rain");
        assert_eq!(dataset.values()[1], None);
        assert_eq!(dataset.colors()[0].as_str(), "#FF6384");
    }

    #[test]
    fn dataset_serializes_as_three_arrays() {
        let mut dataset = ChartDataset::new();
        dataset.push("A", Some(26.0), Color::from_static("#FF6384"));

        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"labels": ["A"], "values": [26.0], "colors": ["#FF6384"]})
        );
    }

    #[test]
    fn empty_dataset_serializes_as_empty_arrays() {
        let json = serde_json::to_value(ChartDataset::new()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"labels": [], "values": [], "colors": []})
        );
    }

    #[test]
    fn misaligned_dataset_is_detected() {
        let dataset: ChartDataset = serde_json::from_value(
            serde_json::json!({"labels": ["A", "B"], "values": [1.0], "colors": ["#fff"]}),
        )
        .unwrap();
        assert!(!dataset.is_aligned());
    }

    #[test]
    fn temperature_class_thresholds() {
        assert_eq!(TemperatureClass::from_celsius(Some(30.0)), TemperatureClass::Hot);
        assert_eq!(TemperatureClass::from_celsius(Some(29.9)), TemperatureClass::Warm);
        assert_eq!(TemperatureClass::from_celsius(Some(20.0)), TemperatureClass::Warm);
        assert_eq!(TemperatureClass::from_celsius(Some(10.0)), TemperatureClass::Mild);
        assert_eq!(TemperatureClass::from_celsius(Some(9.99)), TemperatureClass::Cold);
        assert_eq!(TemperatureClass::from_celsius(None), TemperatureClass::Cold);
        assert_eq!(
            TemperatureClass::from_celsius(Some(f64::NAN)),
            TemperatureClass::Cold
        );
        assert_eq!(TemperatureClass::Hot.to_string(), "hot");
        assert_eq!("mild".parse::<TemperatureClass>().unwrap(), TemperatureClass::Mild);
    }
}
