//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `ASSESSMENT_SERVICE`
//! prefix and `__` between nested keys. Every value has a default, so an
//! empty environment yields a runnable development configuration.
//!
//! # Example
//!
//! ```no_run
//! use assessment_service::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod events;
mod logging;
mod service;

pub use error::{ConfigError, ValidationError};
pub use events::EventsConfig;
pub use logging::LoggingConfig;
pub use service::{Environment, ServiceConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Service identity (event source tag, environment)
    #[serde(default)]
    pub service: ServiceConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Outbound event queue
    #[serde(default)]
    pub events: EventsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present (development)
    /// 2. Reads variables with the `ASSESSMENT_SERVICE` prefix
    /// 3. Splits nested keys on `__`
    ///
    /// `ASSESSMENT_SERVICE__EVENTS__QUEUE_CAPACITY=256` -> `events.queue_capacity = 256`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ASSESSMENT_SERVICE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.service.validate()?;
        self.logging.validate()?;
        self.events.validate()?;
        Ok(())
    }

    /// Source tag for outbound events
    pub fn event_source(&self) -> &str {
        &self.service.name
    }

    pub fn is_production(&self) -> bool {
        self.service.is_production()
    }
}
