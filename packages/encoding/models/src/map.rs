//! Per-map-instance configuration.
//!
//! Every map view owns its own [`MapViewConfig`]; nothing here is a
//! process-wide default that other maps could observe or mutate.

use serde::{Deserialize, Serialize};

/// A geographic position (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl LatLng {
    /// Creates a position.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Where the map camera points and how far it is zoomed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraView {
    /// Center of the viewport.
    pub center: LatLng,
    /// Tile zoom level.
    pub zoom: u8,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            center: LatLng::new(20.0, 0.0),
            zoom: 2,
        }
    }
}

/// Raster tile source for the base map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TileLayer {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    pub url_template: String,
    /// Attribution HTML shown in the map corner.
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
        }
    }
}

/// Marker icon images and anchors, passed to the marker layer at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerIcon {
    /// Standard resolution icon.
    pub icon_url: String,
    /// High-DPI icon.
    pub icon_retina_url: String,
    /// Drop shadow image.
    pub shadow_url: String,
    /// Icon `[width, height]` in pixels.
    pub icon_size: [i32; 2],
    /// Pixel of the icon placed on the coordinate.
    pub icon_anchor: [i32; 2],
    /// Popup offset relative to the anchor.
    pub popup_anchor: [i32; 2],
    /// Shadow `[width, height]` in pixels.
    pub shadow_size: [i32; 2],
}

impl Default for MarkerIcon {
    fn default() -> Self {
        const CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images";
        Self {
            icon_url: format!("{CDN}/marker-icon.png"),
            icon_retina_url: format!("{CDN}/marker-icon-2x.png"),
            shadow_url: format!("{CDN}/marker-shadow.png"),
            icon_size: [25, 41],
            icon_anchor: [12, 41],
            popup_anchor: [1, -34],
            shadow_size: [41, 41],
        }
    }
}

/// Stroke and opacity shared by every circle marker of one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Outline color.
    pub stroke_color: String,
    /// Outline width in pixels.
    pub weight: f64,
    /// Outline opacity.
    pub opacity: f64,
    /// Fill opacity.
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            stroke_color: "#fff".to_string(),
            weight: 2.0,
            opacity: 1.0,
            fill_opacity: 0.7,
        }
    }
}

/// Configuration of one map view instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapViewConfig {
    /// Camera when the view mounts.
    pub initial_camera: CameraView,
    /// Furthest zoom-out allowed.
    pub min_zoom: u8,
    /// Closest zoom-in allowed.
    pub max_zoom: u8,
    /// Zoom applied when a country is selected.
    pub focused_zoom: u8,
    /// Base map tiles.
    pub tiles: TileLayer,
    /// Marker icon for this map.
    pub icon: MarkerIcon,
    /// Circle marker style for this map.
    pub marker_style: MarkerStyle,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            initial_camera: CameraView::default(),
            min_zoom: 2,
            max_zoom: 10,
            focused_zoom: 5,
            tiles: TileLayer::default(),
            icon: MarkerIcon::default(),
            marker_style: MarkerStyle::default(),
        }
    }
}
