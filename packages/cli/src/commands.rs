//! `dashboard` and `markers` subcommands.
//!
//! Both read their input either from a JSON file or from the live
//! statistics API, encode it, and return the encoded value for printing.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use weather_dash_cli_utils::{MultiProgress, spinner};
use weather_dash_client::{ClientError, WeatherApiClient};
use weather_dash_config::DashboardConfig;
use weather_dash_encoding::{ChartLimits, encode_dashboard};
use weather_dash_encoding_models::{DashboardView, MarkerVisual};
use weather_dash_map_view::MarkerLayer;
use weather_dash_weather_models::{CountryStatistics, DashboardStatistics};

use crate::error::CliError;

/// Encodes the dashboard from `input`, or from the live API when `None`.
pub async fn dashboard(
    config: &DashboardConfig,
    multi: &MultiProgress,
    input: Option<&Path>,
    limits: &ChartLimits,
) -> Result<DashboardView, CliError> {
    let stats: DashboardStatistics = match input {
        Some(path) => read_json(path)?,
        None => {
            let client = client(config)?;
            fetch(multi, "Fetching dashboard statistics", client.dashboard_statistics()).await?
        }
    };

    Ok(encode_dashboard(&stats, limits))
}

/// Encodes map markers from `input`, or from the live API when `None`.
pub async fn markers(
    config: &DashboardConfig,
    multi: &MultiProgress,
    input: Option<&Path>,
) -> Result<Vec<MarkerVisual>, CliError> {
    let countries: Vec<CountryStatistics> = match input {
        Some(path) => read_json(path)?,
        None => {
            let client = client(config)?;
            fetch(multi, "Fetching country statistics", client.country_statistics()).await?
        }
    };

    let mut layer = MarkerLayer::new(&config.map);
    layer.rebuild(countries);
    Ok(layer.into_markers())
}

/// Configured chart limits with the `--limit` and `--bars` flags applied.
pub fn chart_limits(
    config: &DashboardConfig,
    limit: Option<usize>,
    bars: Option<usize>,
) -> Result<ChartLimits, CliError> {
    let mut limits = config.chart_limits();
    if let Some(limit) = limit {
        if limit == 0 {
            return Err(CliError::InvalidLimit { name: "limit" });
        }
        limits.extreme_locations_limit = limit;
    }
    if let Some(bars) = bars {
        if bars == 0 {
            return Err(CliError::InvalidLimit { name: "bars" });
        }
        limits.max_country_bars = bars;
    }
    Ok(limits)
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn client(config: &DashboardConfig) -> Result<WeatherApiClient, CliError> {
    Ok(WeatherApiClient::new(
        &config.backend.base_url,
        config.backend.timeout(),
    )?)
}

async fn fetch<T>(
    multi: &MultiProgress,
    message: &str,
    request: impl Future<Output = Result<T, ClientError>>,
) -> Result<T, CliError> {
    let bar = spinner(multi, message);
    let result = request.await;
    bar.finish_and_clear();
    Ok(result?)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    log::info!("Reading {}", path.display());
    let body = std::fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&body)?)
}
