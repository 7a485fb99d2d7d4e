//! Human-readable stock report

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Quantity;

/// Header line printed above every report
pub const REPORT_TITLE: &str = "Items Report";

/// Snapshot of the stock levels, ordered by item name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StockReport {
    pub lines: Vec<ReportLine>,
}

/// One item in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub item: String,
    pub qty: Quantity,
}

impl StockReport {
    pub fn new(lines: Vec<ReportLine>) -> Self {
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for StockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_TITLE)?;
        for line in &self.lines {
            writeln!(f, "{} -> {}", line.item, line.qty)?;
        }
        Ok(())
    }
}
