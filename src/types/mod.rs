//! Data types for the inventory store
//!
//! This module contains the error model, store events and report types shared
//! by the rest of the crate.

mod error;
mod event;
mod report;
mod summary;

pub use error::{InventoryError, InventoryResult};
pub use event::{EventLevel, InventoryEvent};
pub use report::{ReportLine, StockReport, REPORT_TITLE};
pub use summary::LoadSummary;

/// Quantity of a single item. Stored values are always at least 1.
pub type Quantity = i64;
