#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Configuration for the weather dashboard.
//!
//! Values are resolved in three layers:
//!
//! 1. Built-in defaults embedded from `config/default.toml`.
//! 2. An optional TOML file named by `WEATHER_DASH_CONFIG`. Only the keys
//!    it sets are replaced; nested tables are merged key by key.
//! 3. The `BIND_ADDR`, `PORT` and `WEATHER_API_URL` environment variables.
//!
//! The result is validated before it is handed out.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::{Table, Value};
use weather_dash_encoding::ChartLimits;
use weather_dash_encoding_models::map::MapViewConfig;

/// Environment variable naming an optional config file.
pub const CONFIG_PATH_ENV: &str = "WEATHER_DASH_CONFIG";
/// Overrides `server.bind_addr`.
pub const BIND_ADDR_ENV: &str = "BIND_ADDR";
/// Overrides `server.port`.
pub const PORT_ENV: &str = "PORT";
/// Overrides `backend.base_url`.
pub const API_URL_ENV: &str = "WEATHER_API_URL";

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A layer is not valid TOML or does not match the schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// An environment override could not be parsed.
    #[error("Invalid value {value:?} for environment variable {name}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },
    /// The merged configuration violates a constraint.
    #[error("Invalid config: {message}")]
    Invalid {
        /// What is wrong.
        message: String,
    },
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind_addr: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding the compiled frontend.
    pub static_dir: PathBuf,
}

/// Location of the statistics REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL including the `/api` prefix.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// How many entries each dashboard chart and table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartsConfig {
    /// Slices in the condition pie chart.
    pub max_condition_slices: usize,
    /// Bars in the country temperature chart.
    pub max_country_bars: usize,
    /// Rows in the hottest and coldest tables.
    pub extreme_locations_limit: usize,
}

/// Fully resolved dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// `[server]` section.
    pub server: ServerConfig,
    /// `[backend]` section.
    pub backend: BackendConfig,
    /// `[charts]` section.
    pub charts: ChartsConfig,
    /// `[map]` section.
    pub map: MapViewConfig,
}

impl Default for DashboardConfig {
    /// The embedded defaults.
    ///
    /// # Panics
    ///
    /// Panics if the embedded default TOML is malformed. It is compiled into
    /// the binary and covered by tests, so this cannot happen at runtime.
    fn default() -> Self {
        Self::from_layers(None)
            .unwrap_or_else(|e| panic!("Embedded default config is invalid: {e}"))
    }
}

impl DashboardConfig {
    /// Loads the configuration from all three layers and validates it.
    ///
    /// # Errors
    ///
    /// * If the file named by `WEATHER_DASH_CONFIG` cannot be read or parsed
    /// * If an environment override is malformed
    /// * If the merged result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let overlay = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Some(read_file(Path::new(&path))?),
            Err(_) => None,
        };

        let mut config = Self::from_layers(overlay.as_deref())?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;

        log::debug!(
            "Loaded config: server={}:{} backend={}",
            config.server.bind_addr,
            config.server.port,
            config.backend.base_url
        );

        Ok(config)
    }

    /// Merges `overlay` TOML over the embedded defaults.
    ///
    /// Does not read the environment and does not validate.
    ///
    /// # Errors
    ///
    /// * If either layer is not valid TOML or the result does not match the
    ///   schema
    pub fn from_layers(overlay: Option<&str>) -> Result<Self, ConfigError> {
        let mut merged: Table = DEFAULT_CONFIG.parse()?;
        if let Some(overlay) = overlay {
            merge_tables(&mut merged, overlay.parse()?);
        }
        let config: Self = Value::Table(merged).try_into()?;
        Ok(config)
    }

    /// Applies environment overrides, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// * If `PORT` is set but is not a valid port number
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(bind_addr) = lookup(BIND_ADDR_ENV) {
            self.server.bind_addr = bind_addr;
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV,
                value: port,
            })?;
        }
        if let Some(base_url) = lookup(API_URL_ENV) {
            self.backend.base_url = base_url;
        }
        Ok(())
    }

    /// Checks limits and zoom levels.
    ///
    /// # Errors
    ///
    /// * If any chart limit is zero
    /// * If the initial or focused zoom lies outside `[min_zoom, max_zoom]`
    /// * If the request timeout is zero
    /// * If `backend.base_url` points back at this server's own listener
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("charts.max_condition_slices", self.charts.max_condition_slices),
            ("charts.max_country_bars", self.charts.max_country_bars),
            ("charts.extreme_locations_limit", self.charts.extreme_locations_limit),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(invalid(format!("{name} must be at least 1")));
            }
        }

        if self.backend.timeout_secs == 0 {
            return Err(invalid("backend.timeout_secs must be at least 1".to_string()));
        }
        if self.backend_targets_server() {
            return Err(invalid(format!(
                "backend.base_url ({}) points at this server ({}:{})",
                self.backend.base_url, self.server.bind_addr, self.server.port
            )));
        }

        let map = &self.map;
        if map.min_zoom > map.max_zoom {
            return Err(invalid(format!(
                "map.minZoom ({}) exceeds map.maxZoom ({})",
                map.min_zoom, map.max_zoom
            )));
        }
        for (name, zoom) in [
            ("map.initialCamera.zoom", map.initial_camera.zoom),
            ("map.focusedZoom", map.focused_zoom),
        ] {
            if !(map.min_zoom..=map.max_zoom).contains(&zoom) {
                return Err(invalid(format!(
                    "{name} ({zoom}) must be within [{}, {}]",
                    map.min_zoom, map.max_zoom
                )));
            }
        }

        Ok(())
    }

    /// Whether the statistics API URL resolves to the address this server
    /// listens on, which would make every proxied request call itself.
    fn backend_targets_server(&self) -> bool {
        let Some((host, port)) = url_host_port(&self.backend.base_url) else {
            return false;
        };
        if port != self.server.port {
            return false;
        }
        let bind = self.server.bind_addr.trim_matches(['[', ']']);
        host.eq_ignore_ascii_case(bind)
            || (is_loopback(host) && (is_loopback(bind) || matches!(bind, "0.0.0.0" | "::")))
    }

    /// Chart limits for the dashboard encoder.
    #[must_use]
    pub const fn chart_limits(&self) -> ChartLimits {
        ChartLimits {
            max_condition_slices: self.charts.max_condition_slices,
            max_country_bars: self.charts.max_country_bars,
            extreme_locations_limit: self.charts.extreme_locations_limit,
        }
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    log::info!("Reading config from {}", path.display());
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Host and port of an `http`/`https` URL. The port falls back to the
/// scheme default when absent. IPv6 hosts are returned without brackets.
fn url_host_port(url: &str) -> Option<(&str, u16)> {
    let (rest, default_port) = if let Some(rest) = url.strip_prefix("http://") {
        (rest, 80)
    } else if let Some(rest) = url.strip_prefix("https://") {
        (rest, 443)
    } else {
        return None;
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let authority = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    let (host, port) = if let Some(bracketed) = authority.strip_prefix('[') {
        let (host, after) = bracketed.split_once(']')?;
        (host, after.strip_prefix(':'))
    } else {
        match authority.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        }
    };

    let port = match port {
        Some(port) => port.parse().ok()?,
        None => default_port,
    };
    Some((host, port))
}

fn is_loopback(host: &str) -> bool {
    host.eq_ignore_ascii_case("localhost") || host == "::1" || host.starts_with("127.")
}

const fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid { message }
}

/// Recursively merges `overlay` into `base`. Tables merge key by key; any
/// other value replaces what was there.
fn merge_tables(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match value {
            Value::Table(incoming) => match base.get_mut(&key) {
                Some(Value::Table(existing)) => merge_tables(existing, incoming),
                _ => {
                    base.insert(key, Value::Table(incoming));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn embedded_defaults_parse_and_validate() {
        let config = DashboardConfig::default();
        config.validate().unwrap();

        assert_eq!(config.server.bind_addr, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, PathBuf::from("app/dist"));
        assert_eq!(config.backend.base_url, "http://localhost:8080/api");
        assert_eq!(config.backend.timeout(), Duration::from_secs(30));
        assert_eq!(config.chart_limits(), ChartLimits::default());
    }

    #[test]
    fn embedded_map_section_matches_builtin_map_defaults() {
        assert_eq!(DashboardConfig::default().map, MapViewConfig::default());
    }

    #[test]
    fn overlay_replaces_only_given_keys() {
        let config = DashboardConfig::from_layers(Some(
            r#"
            [server]
            port = 9000

            [map]
            focusedZoom = 6

            [map.markerStyle]
            fillOpacity = 0.5
            "#,
        ))
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind_addr, "127.0.0.1");
        assert_eq!(config.map.focused_zoom, 6);
        assert_eq!(config.map.max_zoom, 10);
        assert!((config.map.marker_style.fill_opacity - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.map.marker_style.stroke_color, "#fff");
    }

    #[test]
    fn overlay_with_bad_type_is_parse_error() {
        let err = DashboardConfig::from_layers(Some("[server]\nport = \"eighty\"\n")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn env_overrides_win() {
        let mut config = DashboardConfig::default();
        config
            .apply_overrides(env(&[
                ("BIND_ADDR", "0.0.0.0"),
                ("PORT", "4000"),
                ("WEATHER_API_URL", "http://stats:8080/api"),
            ]))
            .unwrap();

        assert_eq!(config.server.bind_addr, "0.0.0.0");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.backend.base_url, "http://stats:8080/api");
    }

    #[test]
    fn malformed_port_is_rejected() {
        let mut config = DashboardConfig::default();
        let err = config.apply_overrides(env(&[("PORT", "http")])).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnv { name: "PORT", ref value } if value == "http"),
            "got {err:?}"
        );
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn default_server_does_not_listen_on_backend_address() {
        let config = DashboardConfig::default();
        let (_, backend_port) = url_host_port(&config.backend.base_url).unwrap();
        assert_ne!(config.server.port, backend_port);
        assert!(!config.backend_targets_server());
    }

    #[test]
    fn backend_on_own_address_fails_validation() {
        let mut config = DashboardConfig::default();
        config.server.port = 8080;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("backend.base_url"), "got {err}");

        config.server.bind_addr = "0.0.0.0".to_string();
        config.backend.base_url = "http://127.0.0.1:8080".to_string();
        assert!(config.validate().is_err());

        config.server.port = 80;
        config.backend.base_url = "http://localhost/api".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn backend_on_other_host_or_port_is_accepted() {
        let mut config = DashboardConfig::default();
        config.server.port = 8080;
        config.backend.base_url = "http://stats.internal:8080/api".to_string();
        config.validate().unwrap();

        config.server.bind_addr = "10.0.0.5".to_string();
        config.backend.base_url = "http://localhost:8080/api".to_string();
        config.validate().unwrap();

        config.backend.base_url = "https://localhost/api".to_string();
        config.server.port = 80;
        config.validate().unwrap();
    }

    #[test]
    fn url_host_port_handles_defaults_and_ipv6() {
        assert_eq!(url_host_port("http://localhost:8080/api"), Some(("localhost", 8080)));
        assert_eq!(url_host_port("https://stats.example/api"), Some(("stats.example", 443)));
        assert_eq!(url_host_port("http://[::1]:9000"), Some(("::1", 9000)));
        assert_eq!(url_host_port("http://user@host:81/x"), Some(("host", 81)));
        assert_eq!(url_host_port("ftp://host/"), None);
    }

    #[test]
    fn zero_limit_fails_validation() {
        let mut config = DashboardConfig::default();
        config.charts.max_country_bars = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("charts.max_country_bars"), "got {err}");
    }

    #[test]
    fn focused_zoom_out_of_range_fails_validation() {
        let mut config = DashboardConfig::default();
        config.map.focused_zoom = 12;
        assert!(config.validate().is_err());

        config.map.focused_zoom = 5;
        config.map.initial_camera.zoom = 1;
        assert!(config.validate().is_err());

        config.map.initial_camera.zoom = 2;
        config.map.min_zoom = 11;
        assert!(config.validate().is_err());
    }

    #[test]
    fn merge_replaces_scalar_with_table_and_back() {
        let mut base: Table = "a = 1\n[b]\nc = 2\n".parse().unwrap();
        merge_tables(&mut base, "b = 3\n[a]\nx = 4\n".parse().unwrap());
        assert_eq!(base["b"].as_integer(), Some(3));
        assert_eq!(base["a"]["x"].as_integer(), Some(4));
    }
}
