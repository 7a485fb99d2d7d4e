//! Sink that forwards events to `tracing`

use tracing::{error, info, warn};

use super::EventSink;
use crate::types::{EventLevel, InventoryEvent};

/// Emits each event as a `tracing` event at the event's level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &InventoryEvent) {
        match event.level() {
            EventLevel::Info => info!(target: "inventory", "{}", event),
            EventLevel::Warn => warn!(target: "inventory", "{}", event),
            EventLevel::Error => error!(target: "inventory", "{}", event),
        }
    }
}
