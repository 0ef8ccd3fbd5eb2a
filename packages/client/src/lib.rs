#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Client for the weather statistics REST API.
//!
//! The statistics backend owns all aggregation; this client only fetches
//! its JSON snapshots and decodes them into
//! [`weather_dash_weather_models`] types. Each call is a single request
//! with no retries and no caching.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use weather_dash_weather_models::{
    ConditionCount, CountryStatistics, CountryTemperature, DashboardStatistics, DataLoadStatus,
    LoadDataResponse, WeatherRecord,
};

/// Errors from statistics API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Response status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Async client for the statistics API rooted at a base URL such as
/// `http://localhost:8080/api`.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherApiClient {
    /// Creates a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the API endpoint at `path`.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET /statistics/dashboard`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    pub async fn dashboard_statistics(&self) -> Result<DashboardStatistics, ClientError> {
        self.get_json("statistics/dashboard", &[]).await
    }

    /// `GET /statistics/countries`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    pub async fn country_statistics(&self) -> Result<Vec<CountryStatistics>, ClientError> {
        self.get_json("statistics/countries", &[]).await
    }

    /// `GET /statistics/conditions`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    pub async fn condition_distribution(&self) -> Result<Vec<ConditionCount>, ClientError> {
        self.get_json("statistics/conditions", &[]).await
    }

    /// `GET /statistics/temperature-by-country`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    pub async fn temperature_by_country(&self) -> Result<Vec<CountryTemperature>, ClientError> {
        self.get_json("statistics/temperature-by-country", &[]).await
    }

    /// `GET /statistics/hottest?limit=N`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    pub async fn hottest_locations(&self, limit: usize) -> Result<Vec<WeatherRecord>, ClientError> {
        self.get_json("statistics/hottest", &[("limit", limit.to_string())])
            .await
    }

    /// `GET /statistics/coldest?limit=N`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    pub async fn coldest_locations(&self, limit: usize) -> Result<Vec<WeatherRecord>, ClientError> {
        self.get_json("statistics/coldest", &[("limit", limit.to_string())])
            .await
    }

    /// `GET /data/status`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    pub async fn data_status(&self) -> Result<DataLoadStatus, ClientError> {
        self.get_json("data/status", &[]).await
    }

    /// `POST /data/load`. Asks the backend to (re)load its data source.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    pub async fn load_data(&self) -> Result<LoadDataResponse, ClientError> {
        let url = self.endpoint_url("data/load");
        log::info!("POST {url}");
        let resp = self.http.post(&url).send().await?;
        Self::read_json(resp, url).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.endpoint_url(path);
        log::debug!("GET {url} {query:?}");
        let resp = self.http.get(&url).query(query).send().await?;
        Self::read_json(resp, url).await
    }

    async fn read_json<T: DeserializeOwned>(
        resp: reqwest::Response,
        url: String,
    ) -> Result<T, ClientError> {
        check_status(resp.status().as_u16(), &url)?;
        let body = resp.text().await?;
        decode(&url, &body)
    }
}

fn check_status(status: u16, url: &str) -> Result<(), ClientError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        log::error!("{url} returned HTTP {status}");
        Err(ClientError::Status {
            status,
            url: url.to_string(),
        })
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|source| ClientError::Decode {
        url: url.to_string(),
        source,
    })
}
