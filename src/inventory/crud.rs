//! Mutations and lookups

use crate::types::{InventoryError, InventoryEvent, InventoryResult, Quantity};
use crate::utils::time::now_iso;
use crate::validation::{validate_item_name, validate_removal_qty};

use super::InventoryStore;

/// Add `qty` (possibly negative) to `item`; a total of zero or less drops the item
pub fn add(
    store: &mut InventoryStore,
    item: &str,
    qty: Quantity,
    log: Option<&mut Vec<String>>,
) -> InventoryResult<()> {
    validate_item_name(item)?;

    let current = store.stock.get(item).copied().unwrap_or(0);
    let new_qty = current
        .checked_add(qty)
        .ok_or_else(|| InventoryError::invalid(format!("qty {} overflows stock of {}", qty, item)))?;

    let stored = if new_qty <= 0 {
        store.stock.remove(item);
        None
    } else {
        store.stock.insert(item.to_string(), new_qty);
        Some(new_qty)
    };

    if let Some(log) = log {
        log.push(format!("{}: Added {} of {}", now_iso(), qty, item));
    }

    store.emit(InventoryEvent::Added {
        item: item.to_string(),
        qty,
        new_qty: stored,
    });
    Ok(())
}

/// Remove `qty` from a stocked item; removing all of it or more deletes the item
pub fn remove(store: &mut InventoryStore, item: &str, qty: Quantity) -> InventoryResult<()> {
    validate_item_name(item)?;
    validate_removal_qty(qty)?;

    let current = store
        .stock
        .get_mut(item)
        .ok_or_else(|| InventoryError::not_found(item))?;

    let remaining = if *current > qty {
        *current -= qty;
        Some(*current)
    } else {
        None
    };
    if remaining.is_none() {
        store.stock.remove(item);
    }

    store.emit(InventoryEvent::Removed {
        item: item.to_string(),
        qty,
        remaining,
    });
    Ok(())
}

/// Current quantity of `item`, 0 when absent
pub fn get(store: &InventoryStore, item: &str) -> InventoryResult<Quantity> {
    validate_item_name(item)?;
    Ok(store.stock.get(item).copied().unwrap_or(0))
}
