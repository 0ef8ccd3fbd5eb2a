#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared CLI utilities for the weather dashboard binaries.
//!
//! [`init_logger`] sets up `indicatif-log-bridge` so that `log::info!`
//! and friends are suspended while a [`spinner`] redraws.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use indicatif::{MultiProgress, ProgressDrawTarget};

/// Adds a spinner showing `message` to `multi`.
///
/// The caller finishes it with `finish_and_clear` or
/// `finish_with_message` once the operation is done.
#[must_use]
pub fn spinner(multi: &MultiProgress, message: &str) -> ProgressBar {
    let bar = multi.add(ProgressBar::new_spinner());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar
}

/// Initializes the global logger wrapped in `indicatif-log-bridge` so that
/// `log::info!` and friends are suspended while spinners redraw.
///
/// Returns the [`MultiProgress`] that all spinners must be added to.
#[must_use]
pub fn init_logger() -> MultiProgress {
    let multi = MultiProgress::new();

    // Build the pretty-env-logger logger manually so we can wrap it.
    let logger = pretty_env_logger::formatted_builder()
        .parse_env("RUST_LOG")
        .build();
    let level = logger.filter();

    indicatif_log_bridge::LogWrapper::new(multi.clone(), logger)
        .try_init()
        .ok(); // Already set (e.g., in tests)

    log::set_max_level(level);

    multi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_carries_message() {
        let multi = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        let bar = spinner(&multi, "Fetching dashboard statistics");
        assert_eq!(bar.message(), "Fetching dashboard statistics");
        bar.finish_and_clear();
        assert!(bar.is_finished());
    }

    #[test]
    fn init_logger_is_repeatable() {
        let _first = init_logger();
        let _second = init_logger();
        log::info!("logger initialized twice without panicking");
    }
}
