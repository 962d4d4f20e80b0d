//! Declarative dataset schema used to gate validation.
//!
//! The schema file is JSON with three keys: `columns` (ordered list of
//! name/dtype pairs whose length is the expected column count),
//! `numerical_columns` and `categorical_columns` (required-name lists).
//! Unknown keys and internally inconsistent schemas are rejected at load
//! time rather than surfacing later as missing-key lookups.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// A single declared column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnSpec {
    pub name: String,
    pub dtype: String,
}

/// The full dataset schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSchema {
    pub columns: Vec<ColumnSpec>,
    pub numerical_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
}

impl DataSchema {
    /// Load and eagerly validate a schema file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|error| PipelineError::io("open", path, error))?;
        let schema: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|error| PipelineError::schema(path, error.to_string()))?;
        schema.ensure_consistent(path)?;
        Ok(schema)
    }

    pub fn expected_column_count(&self) -> usize {
        self.columns.len()
    }

    /// Reject schemas that would make every validation run fail trivially:
    /// an empty column list, or required names absent from `columns`.
    fn ensure_consistent(&self, path: &Path) -> Result<()> {
        if self.columns.is_empty() {
            return Err(PipelineError::schema(path, "`columns` must not be empty"));
        }
        for name in self
            .numerical_columns
            .iter()
            .chain(self.categorical_columns.iter())
        {
            if !self.columns.iter().any(|column| &column.name == name) {
                return Err(PipelineError::schema(
                    path,
                    format!("required column '{name}' is not declared in `columns`"),
                ));
            }
        }
        Ok(())
    }
}
