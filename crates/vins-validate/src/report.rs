//! Durable JSON form of a validation outcome.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use vins_model::{PipelineError, Result};

/// Persisted as `{"validation_status": bool, "message": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub validation_status: bool,
    pub message: String,
}

/// Write the report, creating parent directories and overwriting any
/// previous report at the same path.
pub fn write_report(path: &Path, report: &ValidationReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|error| PipelineError::io("create directory", parent, error))?;
    }
    let file = File::create(path).map_err(|error| PipelineError::io("create", path, error))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .map_err(|error| PipelineError::report(path, error))?;
    Ok(())
}

pub fn read_report(path: &Path) -> Result<ValidationReport> {
    let file = File::open(path).map_err(|error| PipelineError::io("open", path, error))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|error| PipelineError::report(path, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_validation/report.json");
        let report = ValidationReport {
            validation_status: false,
            message: "training data is missing required columns; Validation Failed".to_string(),
        };
        write_report(&path, &report).unwrap();
        assert_eq!(read_report(&path).unwrap(), report);
    }

    #[test]
    fn rewriting_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_report(
            &path,
            &ValidationReport {
                validation_status: false,
                message: "Validation Failed".to_string(),
            },
        )
        .unwrap();
        let newer = ValidationReport {
            validation_status: true,
            message: "Validation Successful".to_string(),
        };
        write_report(&path, &newer).unwrap();
        assert_eq!(read_report(&path).unwrap(), newer);
    }

    #[test]
    fn uses_the_spec_field_names() {
        let report = ValidationReport {
            validation_status: true,
            message: "Validation Successful".to_string(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"validation_status\""));
        assert!(json.contains("\"message\""));
    }
}
