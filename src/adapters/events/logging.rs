//! Transport that writes events to the tracing log.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// Logs each envelope instead of sending it anywhere.
///
/// Stands in for a broker in the development binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingTransport;

impl LoggingTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for LoggingTransport {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let body = serde_json::to_string(&event).map_err(|e| {
            DomainError::new(ErrorCode::PublishFailed, format!("Cannot serialize event: {}", e))
        })?;

        info!(
            event_id = %event.event_id,
            event_kind = %event.event_kind,
            routing_key = event.event_kind.routing_key(),
            aggregate_id = %event.aggregate_id,
            "Event delivered"
        );
        debug!(body = %body, "Event body");
        Ok(())
    }
}
