//! Marker layer owned by one map instance.

use weather_dash_encoding::GeoMarkerEncoder;
use weather_dash_encoding_models::MarkerVisual;
use weather_dash_encoding_models::map::{MapViewConfig, MarkerIcon, MarkerStyle};
use weather_dash_weather_models::CountryStatistics;

use crate::MapViewState;

/// The markers currently shown on one map, plus the icon and style they
/// are drawn with.
///
/// The icon is supplied at construction and belongs to this layer only.
#[derive(Debug, Clone)]
pub struct MarkerLayer {
    icon: MarkerIcon,
    style: MarkerStyle,
    encoder: GeoMarkerEncoder,
    countries: Vec<CountryStatistics>,
    markers: Vec<MarkerVisual>,
    /// Index into `countries` of the country behind each marker.
    sources: Vec<usize>,
}

impl MarkerLayer {
    /// Creates an empty layer using the icon and style of `config`.
    #[must_use]
    pub fn new(config: &MapViewConfig) -> Self {
        Self::with_parts(config.icon.clone(), config.marker_style.clone())
    }

    /// Creates an empty layer with the given icon and style.
    #[must_use]
    pub const fn with_parts(icon: MarkerIcon, style: MarkerStyle) -> Self {
        Self {
            icon,
            style,
            encoder: GeoMarkerEncoder::new(),
            countries: Vec::new(),
            markers: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// Replaces the whole marker set with markers for `countries`.
    ///
    /// Previous markers are dropped rather than diffed.
    pub fn rebuild(&mut self, countries: Vec<CountryStatistics>) {
        let (sources, markers): (Vec<usize>, Vec<MarkerVisual>) = countries
            .iter()
            .enumerate()
            .filter_map(|(index, country)| {
                self.encoder.encode_one(country).map(|marker| (index, marker))
            })
            .unzip();
        self.sources = sources;
        self.markers = markers;
        log::debug!(
            "Rebuilt marker layer: {} markers for {} countries",
            self.markers.len(),
            countries.len()
        );
        self.countries = countries;
    }

    /// Removes every marker.
    pub fn clear(&mut self) {
        self.markers.clear();
        self.sources.clear();
        self.countries.clear();
    }

    /// First placed country whose key is `country_key`.
    ///
    /// Keys are not unique: every nameless country is `"Unknown"`. Use
    /// [`Self::country_at`] to resolve a specific marker.
    #[must_use]
    pub fn find(&self, country_key: &str) -> Option<&CountryStatistics> {
        self.sources
            .iter()
            .map(|&index| &self.countries[index])
            .find(|country| country.label() == country_key)
    }

    /// Country behind the marker at `marker_index` of [`Self::markers`].
    #[must_use]
    pub fn country_at(&self, marker_index: usize) -> Option<&CountryStatistics> {
        self.sources
            .get(marker_index)
            .map(|&index| &self.countries[index])
    }

    /// Handles a click on the marker at `marker_index` by selecting its
    /// country in `state`. Returns `false` if no such marker exists.
    pub fn click_at(&self, marker_index: usize, state: &mut MapViewState) -> bool {
        match self.country_at(marker_index) {
            Some(country) => {
                state.select(country.clone());
                true
            }
            None => {
                log::warn!(
                    "Click on marker {marker_index}, layer has {}",
                    self.markers.len()
                );
                false
            }
        }
    }

    /// Current markers, in input order.
    #[must_use]
    pub fn markers(&self) -> &[MarkerVisual] {
        &self.markers
    }

    /// Consumes the layer, returning its markers.
    #[must_use]
    pub fn into_markers(self) -> Vec<MarkerVisual> {
        self.markers
    }

    /// Marker icon of this layer.
    #[must_use]
    pub const fn icon(&self) -> &MarkerIcon {
        &self.icon
    }

    /// Circle style of this layer.
    #[must_use]
    pub const fn style(&self) -> &MarkerStyle {
        &self.style
    }
}
