//! Logging bootstrap from the resolved configuration.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use resql_config::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LEVELS: [&str; 5] = ["DEBUG", "INFO", "WARN", "ERROR", "OFF"];

/// Build the level filter from the record's `node.log-level`.
///
/// The level names are the ones the config file documents; anything else
/// is a fatal startup error rather than a silently permissive filter.
fn level_filter(level: &str) -> anyhow::Result<EnvFilter> {
    if !LEVELS.contains(&level.to_uppercase().as_str()) {
        return Err(anyhow!(
            "invalid log level '{level}', expected one of DEBUG, INFO, WARN, ERROR, OFF"
        ));
    }

    EnvFilter::try_new(level.to_lowercase())
        .map_err(|e| anyhow!("invalid log level '{level}': {e}"))
}

/// Initialize the global tracing subscriber from `node.log-level` and
/// `node.log-destination`.
///
/// `stdout` and `stderr` select the corresponding stream; any other
/// destination is treated as a file path and opened in append mode.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let filter = level_filter(&config.node.log_level)?;

    match config.node.log_destination.as_str() {
        "stdout" => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        "stderr" => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        path => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log destination '{path}'"))?;
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
    }

    Ok(())
}
