#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the weather dashboard.
//!
//! Sits between the frontend and the statistics API. Every request
//! fetches a fresh snapshot from the statistics API, runs it through the
//! encoders, and returns ready-to-render chart datasets and map markers.
//! Nothing is cached between requests. The compiled frontend is served
//! from the configured static directory.

mod handlers;
pub mod interactive;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use weather_dash_client::WeatherApiClient;
use weather_dash_config::DashboardConfig;

/// Shared application state.
pub struct AppState {
    /// Client for the upstream statistics API.
    pub client: WeatherApiClient,
    /// Resolved configuration.
    pub config: DashboardConfig,
}

impl AppState {
    /// Builds the state, creating the upstream client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an `std::io::Error` if the HTTP client cannot be built.
    pub fn new(config: DashboardConfig) -> std::io::Result<Self> {
        let client = WeatherApiClient::new(&config.backend.base_url, config.backend.timeout())
            .map_err(std::io::Error::other)?;
        Ok(Self { client, config })
    }
}

/// Registers the `/api` routes. Mount inside `web::scope("/api")`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .route("/status", web::get().to(handlers::status))
        .route("/data/load", web::post().to(handlers::load_data))
        .route("/dashboard", web::get().to(handlers::dashboard))
        .route("/charts/conditions", web::get().to(handlers::condition_chart))
        .route("/charts/temperature", web::get().to(handlers::temperature_chart))
        .route("/map", web::get().to(handlers::map))
        .route("/map/config", web::get().to(handlers::map_config));
}

/// Starts the dashboard server with `config`.
///
/// This is a regular async function; the caller provides the runtime
/// (e.g. via `#[actix_web::main]`) and initializes logging.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the upstream client cannot be
/// built, or if the HTTP server fails to bind or encounters a runtime
/// error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: DashboardConfig) -> std::io::Result<()> {
    let bind_addr = config.server.bind_addr.clone();
    let port = config.server.port;
    let static_dir = config.server.static_dir.clone();

    log::info!("Using statistics API at {}", config.backend.base_url);
    let state = web::Data::new(AppState::new(config)?);

    let serve_static = static_dir.is_dir();
    if !serve_static {
        log::warn!(
            "Static directory {} not found; serving the API only",
            static_dir.display()
        );
    }

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        let app = App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(web::scope("/api").configure(configure_api));

        // Frontend static files (production)
        if serve_static {
            app.service(Files::new("/", &static_dir).index_file("index.html"))
        } else {
            app
        }
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
