//! Interactive mode for the server.
//!
//! Prompts for bind address, port and statistics API URL before starting
//! the server.

use dialoguer::{Confirm, Input};
use weather_dash_config::DashboardConfig;

/// Runs the server in interactive mode, prompting for the settings most
/// often changed. Each prompt defaults to the value already in `config`.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the entered settings fail
/// validation or the underlying server fails to start.
#[allow(clippy::future_not_send)]
pub async fn run(mut config: DashboardConfig) -> std::io::Result<()> {
    println!("Weather Dashboard Server");
    println!();

    config.server.bind_addr = Input::new()
        .with_prompt("Bind address")
        .default(config.server.bind_addr.clone())
        .interact_text()
        .unwrap_or_else(|_| config.server.bind_addr.clone());

    config.server.port = Input::new()
        .with_prompt("Port")
        .default(config.server.port)
        .interact_text()
        .unwrap_or(config.server.port);

    config.backend.base_url = Input::new()
        .with_prompt("Statistics API URL")
        .default(config.backend.base_url.clone())
        .interact_text()
        .unwrap_or_else(|_| config.backend.base_url.clone());

    config.validate().map_err(|e| {
        log::error!("{e}");
        std::io::Error::other(e)
    })?;

    let bind_addr = &config.server.bind_addr;
    let port = config.server.port;
    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server(config).await
}
