//! Diagnostic logging setup.
//!
//! Stdout carries the command stream, so logs go to stderr or to a file.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

/// Log file name inside `BUSTERS_LOG_DIR`.
pub const LOG_FILE: &str = "busters.log";

/// Installs the global subscriber.
///
/// Returns the file writer guard when logging to a file; keep it alive until
/// the session ends or buffered lines are lost.
pub fn setup_logging(config: &ClientConfig) -> Result<Option<WorkerGuard>> {
    let filter = env_filter(config);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = file_layer.is_none().then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    if let Some(dir) = &config.log_dir {
        tracing::info!("Log file: {}/{}", dir.display(), LOG_FILE);
    }
    Ok(guard)
}

/// `BUSTERS_LOG`, then `RUST_LOG`, then `info`.
fn env_filter(config: &ClientConfig) -> EnvFilter {
    match &config.log_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}
