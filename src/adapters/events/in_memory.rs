//! In-memory event bus implementation for testing.
//!
//! Captures every published envelope for assertions. Can be switched into a
//! failing mode to exercise the best-effort publish path.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope, EventKind};
use crate::ports::EventPublisher;

/// In-memory event bus for testing.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
///
/// bus.publish(envelope).await?;
///
/// assert_eq!(bus.event_count(), 1);
/// assert!(bus.has_event(EventKind::FeedbackCreated));
/// ```
#[derive(Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
    failing: AtomicBool,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bus that rejects every publish.
    pub fn failing() -> Self {
        let bus = Self::new();
        bus.set_failing(true);
        bus
    }

    /// Toggles failure mode.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    // === Test Helpers ===

    /// Returns all published events.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns events of a specific kind.
    pub fn events_of_kind(&self, kind: EventKind) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_kind == kind)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Clears all published events (for test isolation).
    pub fn clear(&self) {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Checks if an event of the given kind was published.
    pub fn has_event(&self, kind: EventKind) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_kind == kind)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::PublishFailed,
                format!("Transport unavailable for {}", event.event_kind),
            ));
        }
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }
}
