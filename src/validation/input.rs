//! Argument checks for store operations

use crate::types::{InventoryError, InventoryResult, Quantity};

/// Item names must be non-empty
pub fn validate_item_name(item: &str) -> InventoryResult<()> {
    if item.is_empty() {
        return Err(InventoryError::invalid("item must be a non-empty string"));
    }
    Ok(())
}

/// Quantities removed from stock must be positive
pub fn validate_removal_qty(qty: Quantity) -> InventoryResult<()> {
    if qty <= 0 {
        return Err(InventoryError::invalid(
            "qty to remove must be a positive integer",
        ));
    }
    Ok(())
}

/// Low-stock thresholds must be non-negative
pub fn validate_threshold(threshold: Quantity) -> InventoryResult<()> {
    if threshold < 0 {
        return Err(InventoryError::invalid(
            "threshold must be a non-negative integer",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_name() {
        assert!(validate_item_name("apple").is_ok());
        assert!(validate_item_name(" ").is_ok());
        assert!(matches!(
            validate_item_name(""),
            Err(InventoryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_removal_qty() {
        assert!(validate_removal_qty(1).is_ok());
        assert!(validate_removal_qty(0).is_err());
        assert!(validate_removal_qty(-4).is_err());
    }

    #[test]
    fn test_threshold() {
        assert!(validate_threshold(0).is_ok());
        assert!(validate_threshold(5).is_ok());
        assert!(validate_threshold(-1).is_err());
    }
}
