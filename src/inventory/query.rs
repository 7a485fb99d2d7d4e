//! Read-only queries and reporting

use std::io::{self, Write};

use crate::types::{InventoryResult, Quantity, ReportLine, StockReport};
use crate::validation::validate_threshold;

use super::InventoryStore;

/// Items with quantity strictly below `threshold`, ordered by name
pub fn low_stock(store: &InventoryStore, threshold: Quantity) -> InventoryResult<Vec<String>> {
    validate_threshold(threshold)?;
    Ok(store
        .stock
        .iter()
        .filter(|(_, qty)| **qty < threshold)
        .map(|(name, _)| name.clone())
        .collect())
}

/// Every stocked item, ordered by name
pub fn items(store: &InventoryStore) -> impl Iterator<Item = (&str, Quantity)> + '_ {
    store.stock.iter().map(|(name, qty)| (name.as_str(), *qty))
}

pub fn report(store: &InventoryStore) -> StockReport {
    StockReport::new(
        items(store)
            .map(|(item, qty)| ReportLine {
                item: item.to_string(),
                qty,
            })
            .collect(),
    )
}

pub fn write_report<W: Write>(store: &InventoryStore, mut out: W) -> io::Result<()> {
    write!(out, "{}", report(store))?;
    out.flush()
}

/// Print the report to stdout
pub fn print_report(store: &InventoryStore) {
    print!("{}", report(store));
}
