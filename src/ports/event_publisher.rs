//! EventPublisher port - Interface for publishing domain events.
//!
//! The domain hands envelopes to this port without knowing the transport
//! (in-process queue, broker, log sink).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations report transport failures as `PublishFailed`. Callers on
/// the business path never see those errors: `DomainEventEmitter` logs and
/// counts them instead.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several events in order, stopping at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
