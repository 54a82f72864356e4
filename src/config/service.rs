//! Service identity configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::EVENT_SOURCE;

/// Service identity
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Name stamped as `source` on every outbound event
    #[serde(default = "default_name")]
    pub name: String,

    /// Environment name
    #[serde(default)]
    pub environment: Environment,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServiceConfig {
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("service.name"));
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            environment: Environment::default(),
        }
    }
}

fn default_name() -> String {
    EVENT_SOURCE.to_string()
}
