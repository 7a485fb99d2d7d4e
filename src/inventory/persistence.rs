//! Loading and saving the JSON data file
//!
//! The file is a single JSON object mapping item name to quantity. Loading is
//! lenient: entries that cannot be used are skipped (with a warning) and
//! non-positive quantities are dropped. Saving goes through an atomic
//! temp-file-and-rename write.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use crate::types::{InventoryError, InventoryEvent, InventoryResult, LoadSummary, Quantity};
use crate::utils::atomic::atomic_write_with;
use crate::validation::coerce_quantity;

use super::InventoryStore;

/// Replace the store's contents with `path`, resetting to empty on any failure.
///
/// Failures are reported to the event sink only.
pub fn load(store: &mut InventoryStore, path: &Path) {
    let _ = try_load(store, path);
}

/// Replace the store's contents with `path`.
///
/// On failure the store is reset to empty, the failure is reported to the
/// event sink and the error is returned.
pub fn try_load(store: &mut InventoryStore, path: &Path) -> InventoryResult<LoadSummary> {
    match read_stock(store, path) {
        Ok((stock, summary)) => {
            store.stock = stock;
            store.emit(InventoryEvent::Loaded {
                path: path.to_path_buf(),
                count: summary.loaded,
            });
            Ok(summary)
        }
        Err(e) => {
            store.stock.clear();
            if e.is_missing_file() {
                store.emit(InventoryEvent::FileMissing {
                    path: path.to_path_buf(),
                });
            } else {
                store.emit(InventoryEvent::LoadFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
            Err(e)
        }
    }
}

/// Parse and clean the data file without touching the store
fn read_stock(
    store: &InventoryStore,
    path: &Path,
) -> InventoryResult<(BTreeMap<String, Quantity>, LoadSummary)> {
    let content = fs::read_to_string(path)?;
    let entries = match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => map,
        other => {
            return Err(InventoryError::invalid_format(format!(
                "inventory file must contain a JSON object, found {}",
                json_kind(&other)
            )))
        }
    };

    let mut stock = BTreeMap::new();
    let mut summary = LoadSummary::default();

    for (key, value) in entries {
        let qty = if key.is_empty() {
            None
        } else {
            coerce_quantity(&value)
        };

        match qty {
            Some(qty) if qty > 0 => {
                stock.insert(key, qty);
            }
            Some(_) => summary.dropped += 1,
            None => {
                summary.skipped += 1;
                store.emit(InventoryEvent::EntrySkipped {
                    path: path.to_path_buf(),
                    key,
                    value: value.to_string(),
                });
            }
        }
    }

    summary.loaded = stock.len();
    Ok((stock, summary))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Write the store to `path`; failures are reported to the event sink only
pub fn save(store: &InventoryStore, path: &Path) {
    if let Err(e) = try_save(store, path) {
        store.emit(InventoryEvent::SaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        });
    }
}

/// Write the store to `path` as pretty-printed JSON, atomically
pub fn try_save(store: &InventoryStore, path: &Path) -> InventoryResult<()> {
    atomic_write_with(path, |out| {
        serde_json::to_writer_pretty(&mut *out, &store.stock).map_err(io::Error::from)?;
        writeln!(out)
    })?;

    store.emit(InventoryEvent::Saved {
        path: path.to_path_buf(),
        count: store.stock.len(),
    });
    Ok(())
}
