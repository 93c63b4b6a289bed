//! Log subscriber setup
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job.

use crate::config::{LogFormat, LoggingConfig, default_log_level};
use crate::utils::error::{NotifierError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set, otherwise the configured level
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            NotifierError::config(format!("Invalid log level {:?}: {}", config.level, e))
        }),
    }
}

/// Install the global subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().with_current_span(false).try_init(),
    };

    installed.map_err(|e| NotifierError::config(format!("Failed to install log subscriber: {}", e)))
}

/// Plain text subscriber on stderr for use before the configuration is loaded
///
/// Meant for `tracing::subscriber::set_default`, so the configured global
/// subscriber can still be installed afterwards.
pub fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
}
