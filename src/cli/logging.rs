//! Tracing subscriber setup. Logs go to stderr; stdout carries protocol
//! messages.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count, falling back to the config level.
pub(crate) fn default_directive(verbose: u8, config_level: Option<&str>) -> String {
    match (verbose, config_level) {
        (0, Some(level)) => level.to_string(),
        (0, None) => "warn".to_string(),
        (1, _) => "info".to_string(),
        (2, _) => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs the global subscriber. `RUST_LOG` wins when set.
pub fn init(verbose: u8, config_level: Option<&str>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive(verbose, config_level))
            .map_err(|e| anyhow!("invalid log level: {}", e))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
