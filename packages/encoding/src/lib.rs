#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Statistics-to-visual-encoding pipeline.
//!
//! Turns aggregate weather statistics into chart datasets, color scales
//! and map marker geometry. Everything here is pure and synchronous: the
//! encoders take already-fetched records by reference and build new
//! values, without I/O.
//!
//! Input problems never fail an encode:
//!
//! - a country without usable coordinates is skipped by the marker
//!   encoder;
//! - an empty country or condition name is rendered as
//!   [`weather_dash_weather_models::UNKNOWN_LABEL`] so labels, values and
//!   colors stay aligned;
//! - empty input produces an empty (not absent) output.

pub mod color_scale;
pub mod conditions;
pub mod dashboard;
pub mod format;
pub mod markers;
pub mod temperature;

pub use color_scale::{BarTemperatureScale, ColorScale, TemperatureColorScale};
pub use conditions::ConditionDistributionEncoder;
pub use dashboard::{ChartLimits, encode_dashboard};
pub use markers::GeoMarkerEncoder;
pub use temperature::CountryTemperatureEncoder;
