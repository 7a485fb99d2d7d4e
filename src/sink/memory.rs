//! In-memory sink

use std::cell::RefCell;
use std::rc::Rc;

use super::EventSink;
use crate::types::{EventLevel, InventoryEvent};

/// Collects events in memory.
///
/// Clones share the same buffer, so one handle can be given to the store
/// while another is kept to read the events back.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Rc<RefCell<Vec<InventoryEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, oldest first
    pub fn events(&self) -> Vec<InventoryEvent> {
        self.events.borrow().clone()
    }

    /// Recorded events at the given level
    pub fn at_level(&self, level: EventLevel) -> Vec<InventoryEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.level() == level)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &InventoryEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
