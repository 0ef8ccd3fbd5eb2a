#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the weather dashboard.
//!
//! Runs the dashboard server, or encodes a dashboard or marker set from a
//! JSON file or the live statistics API and prints it. Without a
//! subcommand it asks which tool to run.
//!
//! Uses `indicatif-log-bridge` (via [`weather_dash_cli_utils::init_logger`])
//! to route `log` output through `indicatif::MultiProgress` so that log
//! lines and fetch spinners never fight for the terminal.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::Select;
use weather_dash_cli_utils::MultiProgress;
use weather_dash_config::DashboardConfig;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "weather_dash", about = "Weather statistics dashboard", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard HTTP server
    Serve,
    /// Prompt for server settings, then run the server
    Interactive,
    /// Print the encoded dashboard as JSON
    Dashboard {
        /// Read `DashboardStatistics` JSON from this file instead of the API
        #[arg(long)]
        input: Option<PathBuf>,
        /// Rows in the hottest and coldest tables
        #[arg(long)]
        limit: Option<usize>,
        /// Bars in the country temperature chart
        #[arg(long)]
        bars: Option<usize>,
    },
    /// Print the encoded map markers as JSON
    Markers {
        /// Read a `CountryStatistics` JSON array from this file instead of the API
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

/// Tools offered when no subcommand is given.
enum Tool {
    Server,
    Dashboard,
    Markers,
}

impl Tool {
    const ALL: &[Self] = &[Self::Server, Self::Dashboard, Self::Markers];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Server => "Start server",
            Self::Dashboard => "Print dashboard from the live API",
            Self::Markers => "Print map markers from the live API",
        }
    }

    const fn command(&self) -> Commands {
        match self {
            Self::Server => Commands::Interactive,
            Self::Dashboard => Commands::Dashboard {
                input: None,
                limit: None,
                bars: None,
            },
            Self::Markers => Commands::Markers { input: None },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = weather_dash_cli_utils::init_logger();
    let cli = Cli::parse();

    if let Err(e) = run(cli, &multi).await {
        log::error!("{e}");
        return Err(e.into());
    }

    Ok(())
}

async fn run(cli: Cli, multi: &MultiProgress) -> Result<(), CliError> {
    let config = DashboardConfig::load()?;

    let command = match cli.command {
        Some(command) => command,
        None => select_tool()?,
    };

    match command {
        Commands::Serve => {
            // The server uses actix-web's runtime, so we need to run it
            // in a blocking task to avoid nesting tokio runtimes.
            tokio::task::spawn_blocking(move || {
                actix_web::rt::System::new().block_on(weather_dash_server::run_server(config))
            })
            .await??;
        }
        Commands::Interactive => {
            tokio::task::spawn_blocking(move || {
                actix_web::rt::System::new()
                    .block_on(weather_dash_server::interactive::run(config))
            })
            .await??;
        }
        Commands::Dashboard { input, limit, bars } => {
            let limits = commands::chart_limits(&config, limit, bars)?;
            let view = commands::dashboard(&config, multi, input.as_deref(), &limits).await?;
            commands::print_json(&view)?;
        }
        Commands::Markers { input } => {
            let markers = commands::markers(&config, multi, input.as_deref()).await?;
            commands::print_json(&markers)?;
        }
    }

    Ok(())
}

fn select_tool() -> Result<Commands, CliError> {
    println!("Weather Dashboard");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Tool::ALL[idx].command())
}
