//! Country markers for the map view.

use weather_dash_encoding_models::MarkerVisual;
use weather_dash_weather_models::CountryStatistics;

use crate::color_scale::{ColorScale, TemperatureColorScale};
use crate::format::{escape_html, measurement, thousands};

/// Smallest marker radius in pixels.
pub const MIN_RADIUS: f64 = 5.0;
/// Largest marker radius in pixels.
pub const MAX_RADIUS: f64 = 30.0;

/// Marker radius for a country with `record_count` records.
///
/// Grows with the square root of the count so large samples do not
/// swamp the map, clamped to `[MIN_RADIUS, MAX_RADIUS]`. A missing count
/// is treated as zero.
#[must_use]
pub fn radius_for(record_count: Option<u64>) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let count = record_count.unwrap_or(0) as f64;
    (count.sqrt() / 5.0).clamp(MIN_RADIUS, MAX_RADIUS)
}

/// Popup body for a country marker.
///
/// Field order and precision are fixed: name, temperature (1 decimal),
/// humidity (0 decimals), record count and location count (thousands
/// separators).
#[must_use]
pub fn popup_html(country: &CountryStatistics) -> String {
    format!(
        "<div class=\"country-popup\">\
         <h3>{name}</h3>\
         <p><strong>Avg Temperature:</strong> {temperature}</p>\
         <p><strong>Avg Humidity:</strong> {humidity}</p>\
         <p><strong>Weather Records:</strong> {records}</p>\
         <p><strong>Locations:</strong> {locations}</p>\
         </div>",
        name = escape_html(country.label()),
        temperature = measurement(country.average_temperature, 1, "°C"),
        humidity = measurement(country.average_humidity, 0, "%"),
        records = thousands(country.record_count.unwrap_or(0)),
        locations = thousands(country.location_count.unwrap_or(0)),
    )
}

/// Encodes per-country statistics as map markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoMarkerEncoder<S = TemperatureColorScale> {
    scale: S,
}

impl GeoMarkerEncoder {
    /// Creates an encoder using the map temperature scale.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scale: TemperatureColorScale,
        }
    }
}

impl<S: ColorScale> GeoMarkerEncoder<S> {
    /// Creates an encoder with a custom fill color scale.
    #[must_use]
    pub const fn with_scale(scale: S) -> Self {
        Self { scale }
    }

    /// Encodes a single country, or `None` if it has no usable
    /// coordinates.
    #[must_use]
    pub fn encode_one(&self, country: &CountryStatistics) -> Option<MarkerVisual> {
        let Some((latitude, longitude)) = country.coordinates() else {
            log::debug!("Skipping marker for {}: no valid coordinates", country.label());
            return None;
        };

        Some(MarkerVisual {
            country_key: country.label().to_string(),
            latitude,
            longitude,
            radius_pixels: radius_for(country.record_count),
            fill_color: self.scale.color_for(country.average_temperature),
            popup_html: popup_html(country),
        })
    }

    /// Encodes every country that has usable coordinates, in input order.
    #[must_use]
    pub fn encode(&self, countries: &[CountryStatistics]) -> Vec<MarkerVisual> {
        let markers: Vec<MarkerVisual> = countries
            .iter()
            .filter_map(|country| self.encode_one(country))
            .collect();

        log::debug!(
            "Encoded {} markers from {} countries",
            markers.len(),
            countries.len()
        );

        markers
    }
}
