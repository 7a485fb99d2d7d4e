//! Store events
//!
//! Every side effect the inventory store wants to report (mutations, file
//! loads and saves, skipped file entries) is described by an [`InventoryEvent`]
//! and handed to the store's event sink.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Quantity;

/// Severity an event should be reported at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventLevel {
    Info,
    Warn,
    Error,
}

/// Something that happened inside the inventory store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent {
    /// `qty` was added to `item`; `new_qty` is `None` when the item was dropped
    Added {
        item: String,
        qty: Quantity,
        new_qty: Option<Quantity>,
    },
    /// `qty` was removed from `item`; `remaining` is `None` when the item was deleted
    Removed {
        item: String,
        qty: Quantity,
        remaining: Option<Quantity>,
    },
    /// The mapping was replaced by `count` entries read from `path`
    Loaded { path: PathBuf, count: usize },
    /// A file entry was ignored during load
    EntrySkipped {
        path: PathBuf,
        key: String,
        value: String,
    },
    /// The data file was missing; the store was reset to empty
    FileMissing { path: PathBuf },
    /// The data file could not be read or parsed; the store was reset to empty
    LoadFailed { path: PathBuf, reason: String },
    /// The mapping was written to `path`
    Saved { path: PathBuf, count: usize },
    /// Writing the mapping to `path` failed
    SaveFailed { path: PathBuf, reason: String },
}

impl InventoryEvent {
    pub fn level(&self) -> EventLevel {
        match self {
            InventoryEvent::Added { .. }
            | InventoryEvent::Removed { .. }
            | InventoryEvent::Loaded { .. }
            | InventoryEvent::Saved { .. } => EventLevel::Info,
            InventoryEvent::EntrySkipped { .. } | InventoryEvent::FileMissing { .. } => {
                EventLevel::Warn
            }
            InventoryEvent::LoadFailed { .. } | InventoryEvent::SaveFailed { .. } => {
                EventLevel::Error
            }
        }
    }
}

impl fmt::Display for InventoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryEvent::Added { item, qty, new_qty } => match new_qty {
                Some(n) => write!(f, "Added {} of {} (new qty: {})", qty, item, n),
                None => write!(f, "Added {} of {} (new qty: none, item dropped)", qty, item),
            },
            InventoryEvent::Removed {
                item,
                qty,
                remaining,
            } => match remaining {
                Some(n) => write!(f, "Removed {} of {} (remaining: {})", qty, item, n),
                None => write!(f, "Removed {} of {}, item deleted", qty, item),
            },
            InventoryEvent::Loaded { path, count } => {
                write!(f, "Loaded {} items from {}", count, path.display())
            }
            InventoryEvent::EntrySkipped { path, key, value } => write!(
                f,
                "Skipping entry in {}: {:?} -> {}",
                path.display(),
                key,
                value
            ),
            InventoryEvent::FileMissing { path } => write!(
                f,
                "{} not found; starting with empty inventory",
                path.display()
            ),
            InventoryEvent::LoadFailed { path, reason } => write!(
                f,
                "Failed to load {}: {}; starting with empty inventory",
                path.display(),
                reason
            ),
            InventoryEvent::Saved { path, count } => {
                write!(f, "Saved {} items to {}", count, path.display())
            }
            InventoryEvent::SaveFailed { path, reason } => {
                write!(f, "Failed to save inventory to {}: {}", path.display(), reason)
            }
        }
    }
}
