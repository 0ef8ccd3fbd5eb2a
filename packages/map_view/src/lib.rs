#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map view state for the country map.
//!
//! [`MapViewState`] tracks which country is selected and derives the
//! camera from it. [`MarkerLayer`] owns one map's marker icon, style and
//! current marker set. Both are plain values owned by a single map view
//! instance; the hosting UI calls their transition methods in response
//! to user events and data arrivals.

pub mod layer;

pub use layer::MarkerLayer;

use serde::{Deserialize, Serialize};
use weather_dash_encoding_models::TemperatureClass;
use weather_dash_encoding_models::map::{CameraView, LatLng, MapViewConfig};
use weather_dash_weather_models::CountryStatistics;

/// Which country, if any, the user has selected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "country", rename_all = "camelCase")]
pub enum Selection {
    /// Nothing selected. Initial state.
    #[default]
    Unselected,
    /// A country is selected.
    Selected(CountryStatistics),
}

/// Selection and camera of one map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewState {
    selection: Selection,
    camera: CameraView,
    focused_zoom: u8,
}

impl MapViewState {
    /// Creates the state for a freshly mounted view: unselected, camera at
    /// the configured initial position.
    #[must_use]
    pub fn new(config: &MapViewConfig) -> Self {
        Self {
            selection: Selection::Unselected,
            camera: config.initial_camera,
            focused_zoom: config.focused_zoom,
        }
    }

    /// Selects `country` and focuses the camera on it.
    ///
    /// The camera moves to the country's coordinates at the focused zoom,
    /// replacing whatever zoom the user had. A country without usable
    /// coordinates is still selected but the camera stays put.
    pub fn select(&mut self, country: CountryStatistics) {
        match country.coordinates() {
            Some((lat, lng)) => {
                self.camera = CameraView {
                    center: LatLng::new(lat, lng),
                    zoom: self.focused_zoom,
                };
            }
            None => {
                log::debug!(
                    "Selected {} has no coordinates; camera unchanged",
                    country.label()
                );
            }
        }
        self.selection = Selection::Selected(country);
    }

    /// Clears the selection. The camera is left where it is.
    pub fn clear(&mut self) {
        self.selection = Selection::Unselected;
    }

    /// Current selection state.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected country, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&CountryStatistics> {
        match &self.selection {
            Selection::Selected(country) => Some(country),
            Selection::Unselected => None,
        }
    }

    /// Temperature class of the selected country, for the detail panel.
    #[must_use]
    pub fn selected_class(&self) -> Option<TemperatureClass> {
        self.selected()
            .map(|country| TemperatureClass::from_celsius(country.average_temperature))
    }

    /// Current camera.
    #[must_use]
    pub const fn camera(&self) -> CameraView {
        self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, latitude: Option<f64>, longitude: Option<f64>) -> CountryStatistics {
        CountryStatistics {
            country: Some(name.to_string()),
            record_count: Some(100),
            average_temperature: Some(24.0),
            latitude,
            longitude,
            ..CountryStatistics::default()
        }
    }

    #[test]
    fn starts_unselected_at_initial_camera() {
        let config = MapViewConfig::default();
        let state = MapViewState::new(&config);
        assert_eq!(state.selection(), &Selection::Unselected);
        assert!(state.selected().is_none());
        assert_eq!(state.camera(), config.initial_camera);
    }

    #[test]
    fn select_focuses_camera() {
        let mut state = MapViewState::new(&MapViewConfig::default());
        state.select(country("Peru", Some(-9.19), Some(-75.02)));

        assert_eq!(state.selected().map(CountryStatistics::label), Some("Peru"));
        assert_eq!(state.camera().center, LatLng::new(-9.19, -75.02));
        assert_eq!(state.camera().zoom, 5);
        assert_eq!(state.selected_class(), Some(TemperatureClass::Warm));
    }

    #[test]
    fn reselect_moves_to_new_country() {
        let mut state = MapViewState::new(&MapViewConfig::default());
        state.select(country("Peru", Some(-9.19), Some(-75.02)));
        state.select(country("Japan", Some(36.2), Some(138.25)));

        assert_eq!(state.selected().map(CountryStatistics::label), Some("Japan"));
        assert_eq!(state.camera().center, LatLng::new(36.2, 138.25));
    }

    #[test]
    fn clear_leaves_camera_unchanged() {
        let mut state = MapViewState::new(&MapViewConfig::default());
        state.select(country("Peru", Some(-9.19), Some(-75.02)));
        let focused = state.camera();

        state.clear();
        assert!(state.selected().is_none());
        assert!(state.selected_class().is_none());
        assert_eq!(state.camera(), focused);
    }

    #[test]
    fn select_clear_select_is_idempotent() {
        let target = country("Kenya", Some(0.02), Some(37.9));
        let mut state = MapViewState::new(&MapViewConfig::default());

        state.select(target.clone());
        let first = state.camera();
        state.clear();
        state.select(target);

        assert_eq!(state.camera(), first);
    }

    #[test]
    fn focused_zoom_overrides_prior_zoom() {
        let config = MapViewConfig {
            focused_zoom: 7,
            ..MapViewConfig::default()
        };
        let mut state = MapViewState::new(&config);
        state.select(country("Chile", Some(-35.7), Some(-71.5)));
        assert_eq!(state.camera().zoom, 7);
    }

    #[test]
    fn country_without_coordinates_is_selected_without_moving() {
        let config = MapViewConfig::default();
        let mut state = MapViewState::new(&config);
        state.select(country("Atlantis", None, None));

        assert_eq!(state.selected().map(CountryStatistics::label), Some("Atlantis"));
        assert_eq!(state.camera(), config.initial_camera);
    }

    #[test]
    fn serializes_selection_state() {
        let state = MapViewState::new(&MapViewConfig::default());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["selection"]["state"], "unselected");
        assert_eq!(json["camera"]["zoom"], 2);
    }
}
