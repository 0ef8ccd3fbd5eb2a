use std::path::PathBuf;

use thiserror::Error;
use weather_dash_client::ClientError;
use weather_dash_config::ConfigError;

/// Errors surfaced by the `weather_dash` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The statistics API call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Input {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input or output JSON was malformed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A limit flag was zero.
    #[error("--{name} must be at least 1")]
    InvalidLimit {
        /// Flag name.
        name: &'static str,
    },

    /// The HTTP server failed.
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    /// The server task panicked or was cancelled.
    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// An interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
