//! Error model for inventory operations

use thiserror::Error;

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors surfaced by the inventory store.
///
/// `InvalidArgument` and `NotFound` come from caller input and are always
/// returned. The remaining variants come from file handling; the lenient
/// `load`/`save` entry points report them to the event sink instead.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Bad item name, quantity or threshold.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Removal of an item that is not stocked.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File parsed as JSON but is not an inventory object.
    #[error("invalid inventory file: {0}")]
    InvalidFormat(String),
}

impl InventoryError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// True for an I/O error caused by a missing file
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
