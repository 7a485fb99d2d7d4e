//! Load statistics

use serde::{Deserialize, Serialize};

/// What a load kept and discarded from the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoadSummary {
    /// Entries now held by the store
    pub loaded: usize,
    /// Entries ignored with a warning (bad key or uncoercible value)
    pub skipped: usize,
    /// Entries whose value coerced to zero or less
    pub dropped: usize,
}

impl LoadSummary {
    /// Total number of entries seen in the file
    pub fn total(&self) -> usize {
        self.loaded + self.skipped + self.dropped
    }
}
