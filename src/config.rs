//! Runtime configuration
//!
//! Read from the environment:
//!
//! - `INVENTORY_FILE_PATH`: data file, relative paths resolve against the
//!   working directory (default `inventory.json`)
//! - `INVENTORY_LOW_STOCK_THRESHOLD`: threshold used by the demo run (default 5)
//! - `INVENTORY_LOG_FORMAT`: `plain` or `json` (default `plain`)

use std::env;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::types::Quantity;

pub const FILE_PATH_VAR: &str = "INVENTORY_FILE_PATH";
pub const THRESHOLD_VAR: &str = "INVENTORY_LOW_STOCK_THRESHOLD";
pub const LOG_FORMAT_VAR: &str = "INVENTORY_LOG_FORMAT";

pub const DEFAULT_FILE_NAME: &str = "inventory.json";
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Some(LogFormat::Plain),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub file_path: PathBuf,
    pub low_stock_threshold: Quantity,
    pub log_format: LogFormat,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            file_path: current_dir().join(DEFAULT_FILE_NAME),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            log_format: LogFormat::Plain,
        }
    }
}

impl InventoryConfig {
    /// Log format alone, read before logging is initialized
    pub fn log_format_from_env() -> LogFormat {
        env::var(LOG_FORMAT_VAR)
            .ok()
            .and_then(|raw| LogFormat::parse(&raw))
            .unwrap_or_default()
    }

    /// Build config from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from any key lookup; unset or invalid values use defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(FILE_PATH_VAR).filter(|p| !p.is_empty()) {
            config.file_path = resolve_path(&path);
        }

        if let Some(raw) = lookup(THRESHOLD_VAR) {
            match raw.trim().parse::<Quantity>() {
                Ok(t) if t >= 0 => config.low_stock_threshold = t,
                _ => warn!(
                    "Ignoring {}={:?}; using {}",
                    THRESHOLD_VAR, raw, DEFAULT_LOW_STOCK_THRESHOLD
                ),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match LogFormat::parse(&raw) {
                Some(format) => config.log_format = format,
                None => warn!("Ignoring {}={:?}; using plain", LOG_FORMAT_VAR, raw),
            }
        }

        config
    }
}

fn current_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn resolve_path(path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        current_dir().join(path)
    }
}
