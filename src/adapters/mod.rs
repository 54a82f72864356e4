//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - Event transports and the outbound dispatcher
//! - `memory` - In-process persistence, catalog and user directory

pub mod events;
pub mod memory;

pub use events::{
    outbound_queue, ChannelEventPublisher, DispatchStats, DispatcherConfig, EventDispatcher,
    InMemoryEventBus, LoggingTransport,
};
