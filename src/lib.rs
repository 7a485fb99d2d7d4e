//! Inventory Store
//!
//! Tracks item quantities in memory and persists them to a JSON file.
//!
//! # Features
//!
//! - **Positive stock only**: items that reach zero are removed, never kept at zero
//! - **Lenient loading**: bad file entries are skipped with a warning
//! - **Atomic saves**: temp file + rename, never a half-written data file
//! - **Injectable sink**: every side effect is reported through [`sink::EventSink`]
//!
//! # Modules
//!
//! - `inventory`: the store and its operations
//! - `types`: errors, events and report types
//! - `validation`: argument checks and file value coercion
//! - `sink`: event sink interface and implementations
//! - `config`: environment configuration
//! - `logging`: tracing subscriber setup for the binary
//! - `utils`: atomic writes and timestamps
//!
//! # Example
//!
//! ```no_run
//! use inventory_store::InventoryStore;
//!
//! fn main() -> inventory_store::InventoryResult<()> {
//!     let mut store = InventoryStore::new();
//!     store.load("inventory.json");
//!     store.add("apple", 10, None)?;
//!     store.remove("apple", 3)?;
//!     assert_eq!(store.get("apple")?, 7);
//!     store.save("inventory.json");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod inventory;
pub mod logging;
pub mod sink;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::{InventoryConfig, LogFormat};
pub use inventory::InventoryStore;
pub use sink::{EventSink, MemorySink, NullSink, TracingSink};
pub use types::{
    EventLevel, InventoryError, InventoryEvent, InventoryResult, LoadSummary, Quantity,
    ReportLine, StockReport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
