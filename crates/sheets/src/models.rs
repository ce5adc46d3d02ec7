//! Tabular models for fetched spreadsheet data.
//!
//! Cells are kept as raw strings; all numeric and period interpretation
//! happens at the ingestion boundary in the core crate.

use serde::{Deserialize, Serialize};

/// A single tab of a published document, addressed positionally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SheetTable {
    /// Tab title as published (e.g. "summary", "25.08").
    pub title: String,
    /// Rows of raw cell values, outer index = row, inner = column.
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn new(title: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }

    /// Returns the cell at (row, col), if present and non-empty.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }
}

/// A full fetched document: every published tab, in publication order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workbook {
    pub sheets: Vec<SheetTable>,
}

impl Workbook {
    /// Finds a tab by exact title.
    pub fn sheet(&self, title: &str) -> Option<&SheetTable> {
        self.sheets.iter().find(|s| s.title == title)
    }

    /// Titles of all tabs, in publication order.
    pub fn tab_titles(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.title.as_str()).collect()
    }
}
