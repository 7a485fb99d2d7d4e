//! Inventory Store - Core data engine
//!
//! Holds the item -> quantity mapping and exposes mutation, query and
//! persistence operations. The store is an ordinary value: create one, pass
//! it to whatever needs it, drop it when done.

mod crud;
mod persistence;
mod query;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::sink::{EventSink, TracingSink};
use crate::types::{InventoryEvent, InventoryResult, LoadSummary, Quantity, StockReport};

/// Item quantities keyed by name.
///
/// Invariant: every stored quantity is at least 1. Items whose quantity
/// would drop to zero or below are removed.
pub struct InventoryStore {
    pub(crate) stock: BTreeMap<String, Quantity>,
    sink: Box<dyn EventSink>,
}

impl InventoryStore {
    /// Create an empty store that reports events through `tracing`
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }

    /// Create an empty store that reports events to `sink`
    pub fn with_sink<S: EventSink + 'static>(sink: S) -> Self {
        Self {
            stock: BTreeMap::new(),
            sink: Box::new(sink),
        }
    }

    pub(crate) fn emit(&self, event: InventoryEvent) {
        self.sink.record(&event);
    }

    /// Number of distinct items in stock
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Drop every item
    pub fn clear(&mut self) {
        self.stock.clear();
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryStore")
            .field("stock", &self.stock)
            .finish_non_exhaustive()
    }
}

// Public operations, implemented in the submodules
impl InventoryStore {
    // Mutations and lookups (from crud.rs)
    pub fn add(
        &mut self,
        item: &str,
        qty: Quantity,
        log: Option<&mut Vec<String>>,
    ) -> InventoryResult<()> {
        crud::add(self, item, qty, log)
    }

    pub fn remove(&mut self, item: &str, qty: Quantity) -> InventoryResult<()> {
        crud::remove(self, item, qty)
    }

    pub fn get(&self, item: &str) -> InventoryResult<Quantity> {
        crud::get(self, item)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    // Queries (from query.rs)
    pub fn low_stock(&self, threshold: Quantity) -> InventoryResult<Vec<String>> {
        query::low_stock(self, threshold)
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        query::items(self)
    }

    pub fn snapshot(&self) -> BTreeMap<String, Quantity> {
        self.stock.clone()
    }

    pub fn report(&self) -> StockReport {
        query::report(self)
    }

    pub fn write_report<W: std::io::Write>(&self, out: W) -> std::io::Result<()> {
        query::write_report(self, out)
    }

    pub fn print_report(&self) {
        query::print_report(self)
    }

    // Persistence (from persistence.rs)
    pub fn load<P: AsRef<Path>>(&mut self, path: P) {
        persistence::load(self, path.as_ref())
    }

    pub fn try_load<P: AsRef<Path>>(&mut self, path: P) -> InventoryResult<LoadSummary> {
        persistence::try_load(self, path.as_ref())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) {
        persistence::save(self, path.as_ref())
    }

    pub fn try_save<P: AsRef<Path>>(&self, path: P) -> InventoryResult<()> {
        persistence::try_save(self, path.as_ref())
    }
}
