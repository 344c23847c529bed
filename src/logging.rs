//! Tracing subscriber setup.

use crate::config::ParlourConfig;
use anyhow::{Context, Result};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured filter. With a log file configured,
/// output goes there without ANSI colours so it never lands between a
/// prompt and the player's answer.
#[instrument(skip(config))]
pub fn init_tracing(config: &ParlourConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    match config.log_file() {
        Some(path) => {
            let log_file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .try_init(); // Don't panic if already initialized
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }

    info!("Tracing initialized");
    Ok(())
}
