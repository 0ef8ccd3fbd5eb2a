#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregate weather statistics records.
//!
//! These are the value snapshots delivered by the remote statistics API.
//! They are aggregated upstream; nothing in this crate recomputes them.
//! Every field the backend may leave `null` is an `Option` so that a
//! partially populated record still deserializes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Label used in place of an empty or absent country/condition name.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Reads an explicit `null` as the type's default. Paired with
/// `#[serde(default)]` so that absent and `null` fields behave the same.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Returns `name` if it is present and non-blank, otherwise [`UNKNOWN_LABEL`].
#[must_use]
pub fn label_or_unknown(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => UNKNOWN_LABEL,
    }
}

/// Number of weather records observed with a given condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionCount {
    /// Condition text (e.g. "Partly cloudy").
    pub condition: Option<String>,
    /// Number of records with this condition.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

impl ConditionCount {
    /// Creates a condition count.
    #[must_use]
    pub fn new(condition: impl Into<String>, count: u64) -> Self {
        Self {
            condition: Some(condition.into()),
            count,
        }
    }

    /// Display label, falling back to [`UNKNOWN_LABEL`].
    #[must_use]
    pub fn label(&self) -> &str {
        label_or_unknown(self.condition.as_deref())
    }
}

/// Average temperature for a single country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryTemperature {
    /// Country name.
    pub country: Option<String>,
    /// Average temperature in °C, absent if the country has no readings.
    pub average_temperature: Option<f64>,
}

impl CountryTemperature {
    /// Creates a country temperature entry.
    #[must_use]
    pub fn new(country: impl Into<String>, average_temperature: Option<f64>) -> Self {
        Self {
            country: Some(country.into()),
            average_temperature,
        }
    }

    /// Display label, falling back to [`UNKNOWN_LABEL`].
    #[must_use]
    pub fn label(&self) -> &str {
        label_or_unknown(self.country.as_deref())
    }
}

/// Per-country aggregates used by the map view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStatistics {
    /// Country name. Used as the marker key.
    pub country: Option<String>,
    /// Number of weather records for this country.
    pub record_count: Option<u64>,
    /// Number of distinct locations in this country.
    pub location_count: Option<u64>,
    /// Average temperature in °C.
    pub average_temperature: Option<f64>,
    /// Average relative humidity in percent.
    pub average_humidity: Option<f64>,
    /// Representative latitude (WGS84).
    pub latitude: Option<f64>,
    /// Representative longitude (WGS84).
    pub longitude: Option<f64>,
}

impl CountryStatistics {
    /// Display label, falling back to [`UNKNOWN_LABEL`].
    #[must_use]
    pub fn label(&self) -> &str {
        label_or_unknown(self.country.as_deref())
    }

    /// Returns `(latitude, longitude)` if both are present and usable for
    /// rendering.
    ///
    /// A coordinate is rejected when it is absent, non-finite, outside
    /// the WGS84 range, or exactly `0.0`. The backend writes `0.0` for
    /// locations it could not place, so zero means "unset" here.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.filter(|v| is_set(*v) && (-90.0..=90.0).contains(v))?;
        let lon = self
            .longitude
            .filter(|v| is_set(*v) && (-180.0..=180.0).contains(v))?;
        Some((lat, lon))
    }
}

fn is_set(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// A weather station location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Backend identifier.
    pub id: Option<i64>,
    /// Country name.
    pub country: Option<String>,
    /// Location (city) name.
    pub location_name: Option<String>,
    /// Latitude (WGS84).
    pub latitude: Option<f64>,
    /// Longitude (WGS84).
    pub longitude: Option<f64>,
    /// IANA timezone name.
    pub timezone: Option<String>,
}

/// Air quality readings attached to a weather record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQuality {
    /// Carbon monoxide (μg/m³).
    pub carbon_monoxide: Option<f64>,
    /// Ozone (μg/m³).
    pub ozone: Option<f64>,
    /// Nitrogen dioxide (μg/m³).
    pub nitrogen_dioxide: Option<f64>,
    /// Sulphur dioxide (μg/m³).
    pub sulphur_dioxide: Option<f64>,
    /// PM2.5 (μg/m³).
    pub pm25: Option<f64>,
    /// PM10 (μg/m³).
    pub pm10: Option<f64>,
    /// US EPA index (1-6).
    pub us_epa_index: Option<i32>,
    /// UK DEFRA index (1-10).
    pub gb_defra_index: Option<i32>,
}

/// Sun and moon times attached to a weather record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Astronomy {
    /// Local sunrise time (e.g. "06:04 AM").
    pub sunrise: Option<String>,
    /// Local sunset time.
    pub sunset: Option<String>,
    /// Local moonrise time.
    pub moonrise: Option<String>,
    /// Local moonset time.
    pub moonset: Option<String>,
    /// Moon phase name.
    pub moon_phase: Option<String>,
    /// Moon illumination in percent.
    pub moon_illumination: Option<i32>,
}

/// A single weather observation, as listed in the hottest/coldest tables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    /// Backend identifier.
    pub id: Option<i64>,
    /// Where the observation was made.
    pub location: Option<Location>,
    /// Local time of the observation.
    pub last_updated: Option<NaiveDateTime>,
    pub temperature_celsius: Option<f64>,
    pub temperature_fahrenheit: Option<f64>,
    pub feels_like_celsius: Option<f64>,
    pub feels_like_fahrenheit: Option<f64>,
    /// Condition text (e.g. "Sunny").
    pub condition_text: Option<String>,
    /// Relative humidity in percent.
    pub humidity: Option<i32>,
    /// Cloud cover in percent.
    pub cloud: Option<i32>,
    pub visibility_km: Option<f64>,
    pub uv_index: Option<f64>,
    pub wind_mph: Option<f64>,
    pub wind_kph: Option<f64>,
    pub wind_degree: Option<i32>,
    pub wind_direction: Option<String>,
    pub gust_mph: Option<f64>,
    pub gust_kph: Option<f64>,
    pub pressure_mb: Option<f64>,
    pub pressure_in: Option<f64>,
    pub precip_mm: Option<f64>,
    pub precip_in: Option<f64>,
    pub air_quality: Option<AirQuality>,
    pub astronomy: Option<Astronomy>,
}

/// Headline aggregates for the dashboard view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatistics {
    /// Total number of weather records.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_records: u64,
    /// Total number of locations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_locations: u64,
    /// Number of distinct countries.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_countries: u64,
    /// Global average temperature in °C.
    pub average_temperature: Option<f64>,
    /// Global average relative humidity in percent.
    pub average_humidity: Option<f64>,
    /// Global average pressure in millibars.
    pub average_pressure: Option<f64>,
    /// Records per condition, ranked by count descending.
    #[serde(default, deserialize_with = "null_as_default")]
    pub condition_distribution: Vec<ConditionCount>,
    /// Average temperature per country, in the backend's ranking order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature_by_country: Vec<CountryTemperature>,
    /// Hottest observations, hottest first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hottest_locations: Vec<WeatherRecord>,
    /// Coldest observations, coldest first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub coldest_locations: Vec<WeatherRecord>,
}

/// Whether the backend has any data loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLoadStatus {
    /// Number of weather records in the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_records: u64,
    /// `true` once at least one record exists.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_loaded: bool,
}

/// Acknowledgement returned by the backend's data load trigger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadDataResponse {
    /// Outcome keyword (e.g. "success").
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Human-readable message.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country_at(latitude: Option<f64>, longitude: Option<f64>) -> CountryStatistics {
        CountryStatistics {
            country: Some("X".to_string()),
            latitude,
            longitude,
            ..CountryStatistics::default()
        }
    }

    #[test]
    fn labels_fall_back_to_unknown() {
        assert_eq!(ConditionCount::new("Sunny", 3).label(), "Sunny");
        assert_eq!(ConditionCount::new("", 3).label(), UNKNOWN_LABEL);
        assert_eq!(ConditionCount::new("   ", 3).label(), UNKNOWN_LABEL);

        let absent = CountryTemperature {
            country: None,
            average_temperature: Some(10.0),
        };
        assert_eq!(absent.label(), UNKNOWN_LABEL);
    }

    #[test]
    fn coordinates_require_both_values() {
        assert_eq!(
            country_at(Some(10.0), Some(20.0)).coordinates(),
            Some((10.0, 20.0))
        );
        assert!(country_at(None, Some(20.0)).coordinates().is_none());
        assert!(country_at(Some(10.0), None).coordinates().is_none());
    }

    #[test]
    fn coordinates_reject_out_of_range_and_unset() {
        assert!(country_at(Some(91.0), Some(20.0)).coordinates().is_none());
        assert!(country_at(Some(10.0), Some(-180.5)).coordinates().is_none());
        assert!(country_at(Some(0.0), Some(20.0)).coordinates().is_none());
        assert!(country_at(Some(f64::NAN), Some(20.0)).coordinates().is_none());
        assert_eq!(
            country_at(Some(-90.0), Some(180.0)).coordinates(),
            Some((-90.0, 180.0))
        );
    }

    #[test]
    fn deserializes_dashboard_with_nulls() {
        let body = serde_json::json!({
            "totalRecords": 1200,
            "totalLocations": 190,
            "totalCountries": 185,
            "averageTemperature": 21.4,
            "averageHumidity": null,
            "averagePressure": 1013.2,
            "conditionDistribution": [
                {"condition": "Sunny", "count": 500},
                {"condition": null, "count": 3}
            ],
            "temperatureByCountry": [
                {"country": "Chad", "averageTemperature": 38.1},
                {"country": "Iceland", "averageTemperature": null}
            ],
            "hottestLocations": [{
                "id": 7,
                "location": {"id": 1, "country": "Chad", "locationName": "N'Djamena",
                             "latitude": 12.1, "longitude": 15.05, "timezone": "Africa/Ndjamena"},
                "lastUpdated": "2024-05-16T13:15:00",
                "temperatureCelsius": 45.0,
                "conditionText": "Sunny",
                "humidity": 8
            }],
            "coldestLocations": []
        });

        let stats: DashboardStatistics = serde_json::from_value(body).unwrap();
        assert_eq!(stats.total_records, 1200);
        assert!(stats.average_humidity.is_none());
        assert_eq!(stats.condition_distribution[1].label(), UNKNOWN_LABEL);
        assert!(stats.temperature_by_country[1].average_temperature.is_none());

        let hottest = &stats.hottest_locations[0];
        assert_eq!(hottest.temperature_celsius, Some(45.0));
        assert_eq!(
            hottest.location.as_ref().and_then(|l| l.location_name.as_deref()),
            Some("N'Djamena")
        );
        assert!(hottest.last_updated.is_some());
        assert!(hottest.air_quality.is_none());
    }

    #[test]
    fn deserializes_country_statistics() {
        let body = serde_json::json!([{
            "country": "France",
            "recordCount": 1500,
            "locationCount": 3,
            "averageTemperature": 14.25,
            "averageHumidity": 71.0,
            "latitude": 48.85,
            "longitude": 2.35
        }, {
            "country": "Atlantis",
            "recordCount": null,
            "locationCount": null,
            "averageTemperature": null,
            "averageHumidity": null,
            "latitude": null,
            "longitude": null
        }]);

        let countries: Vec<CountryStatistics> = serde_json::from_value(body).unwrap();
        assert_eq!(countries[0].record_count, Some(1500));
        assert_eq!(countries[0].coordinates(), Some((48.85, 2.35)));
        assert!(countries[1].coordinates().is_none());
        assert!(countries[1].record_count.is_none());
    }

    #[test]
    fn explicit_nulls_read_as_defaults() {
        let body = serde_json::json!({
            "totalRecords": null,
            "totalLocations": 4,
            "totalCountries": null,
            "averageTemperature": null,
            "conditionDistribution": [{"condition": "Fog", "count": null}],
            "temperatureByCountry": null,
            "hottestLocations": null,
            "coldestLocations": null
        });

        let stats: DashboardStatistics = serde_json::from_value(body).unwrap();
        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.total_locations, 4);
        assert_eq!(stats.total_countries, 0);
        assert_eq!(stats.condition_distribution, [ConditionCount::new("Fog", 0)]);
        assert!(stats.temperature_by_country.is_empty());
        assert!(stats.hottest_locations.is_empty());
        assert!(stats.coldest_locations.is_empty());

        let status: DataLoadStatus =
            serde_json::from_value(serde_json::json!({"totalRecords": null, "dataLoaded": null}))
                .unwrap();
        assert_eq!(status, DataLoadStatus::default());

        let load: LoadDataResponse =
            serde_json::from_value(serde_json::json!({"status": "success", "message": null}))
                .unwrap();
        assert_eq!(load.status, "success");
        assert!(load.message.is_empty());
    }

    #[test]
    fn deserializes_data_status() {
        let status: DataLoadStatus =
            serde_json::from_value(serde_json::json!({"totalRecords": 0, "dataLoaded": false}))
                .unwrap();
        assert!(!status.data_loaded);
    }
}
