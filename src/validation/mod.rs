//! Input validation and file value coercion
//!
//! Argument checks shared by the store operations, plus the lenient
//! integer coercion applied to values read from the data file.

mod coerce;
mod input;

pub use coerce::coerce_quantity;
pub use input::{validate_item_name, validate_removal_qty, validate_threshold};
