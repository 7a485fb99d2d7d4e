//! Inventory Store - Binary Entry Point
//!
//! Runs a short demonstration against the configured data file.

use std::process::ExitCode;

use tracing::{error, warn};

use inventory_store::{InventoryConfig, InventoryResult, InventoryStore};

fn main() -> ExitCode {
    inventory_store::logging::init(InventoryConfig::log_format_from_env());
    let config = InventoryConfig::from_env();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Unexpected error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &InventoryConfig) -> InventoryResult<()> {
    let mut store = InventoryStore::new();
    let mut log = Vec::new();

    store.add("apple", 10, Some(&mut log))?;
    store.add("banana", 2, Some(&mut log))?;
    // Negative adds below zero drop the item
    if let Err(e) = store.add("orange", -1, Some(&mut log)) {
        warn!("Bad add call: {}", e);
    }

    store.remove("apple", 3)?;

    println!("Apple stock: {}", store.get("apple")?);
    println!(
        "Low items: {:?}",
        store.low_stock(config.low_stock_threshold)?
    );

    store.save(&config.file_path);
    store.load(&config.file_path);
    store.print_report();

    for line in &log {
        println!("{}", line);
    }
    Ok(())
}
