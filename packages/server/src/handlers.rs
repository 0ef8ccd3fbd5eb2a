//! HTTP handler functions for the dashboard API.

use actix_web::{HttpResponse, web};
use weather_dash_client::ClientError;
use weather_dash_encoding::{
    ConditionDistributionEncoder, CountryTemperatureEncoder, encode_dashboard,
};
use weather_dash_map_view::MarkerLayer;
use weather_dash_server_models::{
    ApiError, ApiHealth, ChartQueryParams, DashboardQueryParams, MapPayload,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/status`
///
/// Whether the statistics backend has data loaded.
pub async fn status(state: web::Data<AppState>) -> HttpResponse {
    match state.client.data_status().await {
        Ok(status) => HttpResponse::Ok().json(status),
        Err(e) => upstream_error("fetch data status", &e),
    }
}

/// `POST /api/data/load`
///
/// Forwards a data load request to the statistics backend.
pub async fn load_data(state: web::Data<AppState>) -> HttpResponse {
    match state.client.load_data().await {
        Ok(response) => {
            log::info!("Data load: {} ({})", response.status, response.message);
            HttpResponse::Ok().json(response)
        }
        Err(e) => upstream_error("trigger data load", &e),
    }
}

/// `GET /api/dashboard`
///
/// Fetches the dashboard statistics and encodes every section. `limit`
/// overrides the hottest/coldest row count, `bars` the country bar count.
pub async fn dashboard(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let mut limits = state.config.chart_limits();
    match positive("limit", params.limit) {
        Ok(Some(limit)) => limits.extreme_locations_limit = limit,
        Ok(None) => {}
        Err(resp) => return resp,
    }
    match positive("bars", params.bars) {
        Ok(Some(bars)) => limits.max_country_bars = bars,
        Ok(None) => {}
        Err(resp) => return resp,
    }

    match state.client.dashboard_statistics().await {
        Ok(stats) => HttpResponse::Ok().json(encode_dashboard(&stats, &limits)),
        Err(e) => upstream_error("fetch dashboard statistics", &e),
    }
}

/// `GET /api/charts/conditions`
///
/// Condition distribution pie chart dataset.
pub async fn condition_chart(
    state: web::Data<AppState>,
    params: web::Query<ChartQueryParams>,
) -> HttpResponse {
    let limit = match positive("limit", params.limit) {
        Ok(limit) => limit.unwrap_or(state.config.charts.max_condition_slices),
        Err(resp) => return resp,
    };

    match state.client.condition_distribution().await {
        Ok(conditions) => {
            HttpResponse::Ok().json(ConditionDistributionEncoder::new(limit).encode(&conditions))
        }
        Err(e) => upstream_error("fetch condition distribution", &e),
    }
}

/// `GET /api/charts/temperature`
///
/// Average temperature by country bar chart dataset.
pub async fn temperature_chart(
    state: web::Data<AppState>,
    params: web::Query<ChartQueryParams>,
) -> HttpResponse {
    let limit = match positive("limit", params.limit) {
        Ok(limit) => limit.unwrap_or(state.config.charts.max_country_bars),
        Err(resp) => return resp,
    };

    match state.client.temperature_by_country().await {
        Ok(countries) => {
            HttpResponse::Ok().json(CountryTemperatureEncoder::new(limit).encode(&countries))
        }
        Err(e) => upstream_error("fetch temperature by country", &e),
    }
}

/// `GET /api/map`
///
/// Map configuration plus a freshly built marker set.
pub async fn map(state: web::Data<AppState>) -> HttpResponse {
    match state.client.country_statistics().await {
        Ok(countries) => {
            let mut layer = MarkerLayer::new(&state.config.map);
            layer.rebuild(countries);
            HttpResponse::Ok().json(MapPayload {
                config: state.config.map.clone(),
                markers: layer.into_markers(),
            })
        }
        Err(e) => upstream_error("fetch country statistics", &e),
    }
}

/// `GET /api/map/config`
pub async fn map_config(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.config.map)
}

/// Rejects a zero limit with `400 Bad Request`.
fn positive(name: &str, value: Option<usize>) -> Result<Option<usize>, HttpResponse> {
    match value {
        Some(0) => Err(HttpResponse::BadRequest().json(ApiError::new(format!(
            "{name} must be at least 1"
        )))),
        other => Ok(other),
    }
}

fn upstream_error(action: &str, e: &ClientError) -> HttpResponse {
    log::error!("Failed to {action}: {e}");
    HttpResponse::BadGateway().json(ApiError::new(format!("Failed to {action}")))
}
