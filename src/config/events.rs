//! Outbound event configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Outbound queue and dispatcher settings
#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    /// Bound on envelopes waiting for the dispatcher
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Deliver whatever is still queued when shutdown is signalled
    #[serde(default = "default_drain_on_shutdown")]
    pub drain_on_shutdown: bool,
}

impl EventsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.queue_capacity == 0 {
            return Err(ValidationError::InvalidQueueCapacity);
        }
        Ok(())
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
            drain_on_shutdown: default_drain_on_shutdown(),
        }
    }
}

fn default_queue_capacity() -> usize {
    1024
}

fn default_drain_on_shutdown() -> bool {
    true
}
