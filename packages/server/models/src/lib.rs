#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the weather dashboard server.
//!
//! Chart and dashboard responses reuse the encoding output types
//! directly; only the envelopes and query parameters live here.

use serde::{Deserialize, Serialize};
use weather_dash_encoding_models::MarkerVisual;
use weather_dash_encoding_models::map::MapViewConfig;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Error body returned with any non-success status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable description.
    pub error: String,
}

impl ApiError {
    /// Creates an error body.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Query parameters for the single-chart endpoints.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartQueryParams {
    /// Maximum number of slices or bars. Defaults to the configured limit.
    pub limit: Option<usize>,
}

/// Query parameters for the dashboard endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQueryParams {
    /// Rows in the hottest and coldest tables.
    pub limit: Option<usize>,
    /// Bars in the country temperature chart.
    pub bars: Option<usize>,
}

/// Everything a map view needs to render: its configuration and the
/// current marker set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPayload {
    /// Camera, tiles, icon and marker style.
    pub config: MapViewConfig,
    /// One marker per placeable country.
    pub markers: Vec<MarkerVisual>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_payload_is_camel_case() {
        let payload = MapPayload {
            config: MapViewConfig::default(),
            markers: Vec::new(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["config"]["focusedZoom"], 5);
        assert_eq!(json["config"]["initialCamera"]["center"]["lat"], 20.0);
        assert!(json["markers"].as_array().unwrap().is_empty());
    }

    #[test]
    fn dashboard_params_are_optional() {
        let params: DashboardQueryParams = serde_json::from_str(r#"{"bars": 5}"#).unwrap();
        assert_eq!(params.bars, Some(5));
        assert_eq!(params.limit, None);
    }
}
