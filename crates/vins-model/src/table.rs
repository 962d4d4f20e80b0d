//! In-memory tabular snapshot shared by the ingestion and validation stages.

use serde::{Deserialize, Serialize};

/// Canonical marker for a missing value. Rendered as an empty CSV cell.
pub const MISSING_VALUE: &str = "";

/// A rectangular table of string cells with a header row.
///
/// Rows are padded or truncated to the header width on insertion, so every
/// stored row has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), MISSING_VALUE.to_string());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }

    /// New table with the same headers and the rows at `indices`, in order.
    pub fn subset(&self, indices: &[usize]) -> Self {
        let rows = indices
            .iter()
            .filter_map(|&idx| self.rows.get(idx).cloned())
            .collect();
        Self {
            headers: self.headers.clone(),
            rows,
        }
    }
}
