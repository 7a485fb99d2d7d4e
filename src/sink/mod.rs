//! Event sinks
//!
//! The store never logs on its own. It hands every [`InventoryEvent`] to an
//! [`EventSink`], so embedders choose where messages go and tests can inspect
//! exactly what was reported.
//!
//! - [`TracingSink`]: forwards events to `tracing` (the default)
//! - [`MemorySink`]: keeps events in memory

mod memory;
mod tracing_sink;

pub use memory::MemorySink;
pub use tracing_sink::TracingSink;

use crate::types::InventoryEvent;

/// Receiver for store events
pub trait EventSink {
    /// Record a single event
    fn record(&self, event: &InventoryEvent);
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &InventoryEvent) {}
}
