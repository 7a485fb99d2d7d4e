//! Utility functions and helpers
//!
//! Atomic file writes and timestamp formatting.

pub mod atomic;
pub mod time;

pub use atomic::{atomic_write_with, temp_path_for};
pub use time::now_iso;
