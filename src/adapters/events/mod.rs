//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Capturing transport for tests
//! - `ChannelEventPublisher` / `EventDispatcher` - Outbound queue and its best-effort sender
//! - `LoggingTransport` - Writes events to the log (development binary)

mod dispatcher;
mod in_memory;
mod logging;

pub use dispatcher::{
    outbound_queue, ChannelEventPublisher, DispatchStats, DispatcherConfig, EventDispatcher,
};
pub use in_memory::InMemoryEventBus;
pub use logging::LoggingTransport;
