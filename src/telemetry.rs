//! Tracing subscriber setup.

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Invalid log filter directive: {0}")]
    InvalidFilter(String),

    #[error("Tracing is already initialized")]
    AlreadyInitialized,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured filter when set. Only the first call
/// installs anything; later calls return `AlreadyInitialized`.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|err| TelemetryError::InvalidFilter(err.to_string()))?;

    TRACING_INIT
        .set(())
        .map_err(|_| TelemetryError::AlreadyInitialized)?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    installed.map_err(|_| TelemetryError::AlreadyInitialized)
}
