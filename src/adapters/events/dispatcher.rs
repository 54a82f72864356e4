//! Outbound event queue and its background dispatcher.
//!
//! Business operations publish through `ChannelEventPublisher`, which only
//! enqueues. `EventDispatcher` drains the queue and forwards each envelope to
//! the real transport. Transport failures are logged and counted here; they
//! never travel back to the operation that produced the event.
//!
//! ## Graceful Shutdown
//!
//! The dispatcher listens on a watch channel. On shutdown it optionally
//! delivers whatever is still queued, then stops. It also stops once every
//! publisher handle has been dropped and the queue is empty.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// Counters for delivered and failed events.
#[derive(Debug, Default)]
pub struct DispatchStats {
    delivered: AtomicU64,
    failed: AtomicU64,
}

impl DispatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }
}

/// Publisher half of the outbound queue. Never waits.
#[derive(Debug, Clone)]
pub struct ChannelEventPublisher {
    sender: mpsc::Sender<EventEnvelope>,
}

/// Creates a bounded outbound queue.
///
/// `capacity` must be non-zero.
pub fn outbound_queue(capacity: usize) -> (ChannelEventPublisher, mpsc::Receiver<EventEnvelope>) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (ChannelEventPublisher { sender }, receiver)
}

#[async_trait]
impl EventPublisher for ChannelEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.sender.try_send(event).map_err(|err| match err {
            mpsc::error::TrySendError::Full(event) => DomainError::new(
                ErrorCode::PublishFailed,
                format!("Outbound queue full, dropped {}", event.event_kind),
            ),
            mpsc::error::TrySendError::Closed(event) => DomainError::new(
                ErrorCode::PublishFailed,
                format!("Outbound queue closed, dropped {}", event.event_kind),
            ),
        })
    }
}

/// Configuration for the EventDispatcher.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Deliver events still queued when shutdown is signalled.
    pub drain_on_shutdown: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            drain_on_shutdown: true,
        }
    }
}

/// Background sender that drains the outbound queue into a transport.
pub struct EventDispatcher {
    receiver: mpsc::Receiver<EventEnvelope>,
    transport: Arc<dyn EventPublisher>,
    config: DispatcherConfig,
    stats: Arc<DispatchStats>,
}

impl EventDispatcher {
    /// Create a dispatcher with default configuration.
    pub fn new(receiver: mpsc::Receiver<EventEnvelope>, transport: Arc<dyn EventPublisher>) -> Self {
        Self::with_config(receiver, transport, DispatcherConfig::default())
    }

    pub fn with_config(
        receiver: mpsc::Receiver<EventEnvelope>,
        transport: Arc<dyn EventPublisher>,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            receiver,
            transport,
            config,
            stats: Arc::new(DispatchStats::new()),
        }
    }

    /// Shared handle to the delivery counters.
    pub fn stats(&self) -> Arc<DispatchStats> {
        Arc::clone(&self.stats)
    }

    /// Run until shutdown is signalled or every publisher is gone.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> Arc<DispatchStats> {
        info!("Event dispatcher started");
        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        if self.config.drain_on_shutdown {
                            let drained = self.drain().await;
                            debug!(drained, "Drained outbound queue on shutdown");
                        }
                        break;
                    }
                }

                next = self.receiver.recv() => {
                    match next {
                        Some(event) => self.deliver(event).await,
                        None => break,
                    }
                }
            }
        }
        info!(
            delivered = self.stats.delivered(),
            failed = self.stats.failed(),
            "Event dispatcher stopped"
        );
        self.stats
    }

    /// Deliver everything currently queued, without waiting for more.
    ///
    /// Returns how many events were taken off the queue.
    pub async fn drain(&mut self) -> usize {
        let mut taken = 0;
        while let Ok(event) = self.receiver.try_recv() {
            self.deliver(event).await;
            taken += 1;
        }
        taken
    }

    async fn deliver(&self, event: EventEnvelope) {
        let event_id = event.event_id.clone();
        let kind = event.event_kind;
        match self.transport.publish(event).await {
            Ok(()) => {
                self.stats.record_delivered();
                debug!(event_id = %event_id, event_kind = %kind, "Event dispatched");
            }
            Err(e) => {
                self.stats.record_failed();
                error!(event_id = %event_id, event_kind = %kind, error = %e, "Failed to dispatch event");
            }
        }
    }
}
