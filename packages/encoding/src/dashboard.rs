//! Composition of the full dashboard page from [`DashboardStatistics`].

use weather_dash_encoding_models::{
    ChartView, DashboardView, LocationRow, SummaryCard, TemperatureClass,
};
use weather_dash_weather_models::{DashboardStatistics, WeatherRecord, label_or_unknown};

use crate::conditions::ConditionDistributionEncoder;
use crate::format::{measurement, thousands};
use crate::temperature::CountryTemperatureEncoder;

/// How many entries each dashboard section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLimits {
    /// Slices in the condition pie chart.
    pub max_condition_slices: usize,
    /// Bars in the temperature chart.
    pub max_country_bars: usize,
    /// Rows in each of the hottest/coldest tables.
    pub extreme_locations_limit: usize,
}

impl Default for ChartLimits {
    fn default() -> Self {
        Self {
            max_condition_slices: ConditionDistributionEncoder::DEFAULT_MAX_SLICES,
            max_country_bars: CountryTemperatureEncoder::DEFAULT_MAX_BARS,
            extreme_locations_limit: 10,
        }
    }
}

/// Builds everything the dashboard page renders.
#[must_use]
pub fn encode_dashboard(stats: &DashboardStatistics, limits: &ChartLimits) -> DashboardView {
    let conditions = ConditionDistributionEncoder::new(limits.max_condition_slices)
        .encode(&stats.condition_distribution);
    let temperature = CountryTemperatureEncoder::new(limits.max_country_bars)
        .encode(&stats.temperature_by_country);

    DashboardView {
        summary: summary_cards(stats),
        conditions: ChartView {
            title: "Weather Condition Distribution".to_string(),
            series_label: "Records".to_string(),
            dataset: conditions,
        },
        temperature_by_country: ChartView {
            title: format!(
                "Average Temperature by Country (Top {})",
                limits.max_country_bars
            ),
            series_label: "Average Temperature (°C)".to_string(),
            dataset: temperature,
        },
        hottest: location_rows(&stats.hottest_locations, limits.extreme_locations_limit),
        coldest: location_rows(&stats.coldest_locations, limits.extreme_locations_limit),
    }
}

fn summary_cards(stats: &DashboardStatistics) -> Vec<SummaryCard> {
    let card = |label: &str, value: String| SummaryCard {
        label: label.to_string(),
        value,
    };

    vec![
        card("Total Records", thousands(stats.total_records)),
        card("Locations", thousands(stats.total_locations)),
        card("Countries", thousands(stats.total_countries)),
        card(
            "Avg Temperature",
            measurement(stats.average_temperature, 1, "°C"),
        ),
        card("Avg Humidity", measurement(stats.average_humidity, 0, "%")),
        card("Avg Pressure", measurement(stats.average_pressure, 1, " mb")),
    ]
}

fn location_rows(records: &[WeatherRecord], limit: usize) -> Vec<LocationRow> {
    records
        .iter()
        .take(limit)
        .map(|record| {
            let location = record.location.as_ref();
            LocationRow {
                location: label_or_unknown(location.and_then(|l| l.location_name.as_deref()))
                    .to_string(),
                country: label_or_unknown(location.and_then(|l| l.country.as_deref()))
                    .to_string(),
                temperature: measurement(record.temperature_celsius, 1, "°C"),
                condition: label_or_unknown(record.condition_text.as_deref()).to_string(),
                temperature_class: TemperatureClass::from_celsius(record.temperature_celsius),
            }
        })
        .collect()
}
