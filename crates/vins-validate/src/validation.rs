//! The data-validation stage.
//!
//! Reads the train and test files referenced by the ingestion artifact and
//! runs every check unconditionally: column count and required-column
//! presence, once per subset. Failing checks accumulate reasons; a single
//! failure anywhere makes the overall status false. The outcome is written
//! as a JSON report and returned as the stage artifact.

use std::time::Instant;

use tracing::{error, info, info_span, warn};

use vins_ingest::read_table;
use vins_model::{
    DataSchema, IngestionArtifact, RecordTable, Result, ValidationArtifact, ValidationConfig,
};

use crate::checks::{column_count_matches, missing_required_columns};
use crate::report::{ValidationReport, write_report};

const SUCCESS_MARKER: &str = "Validation Successful";
const FAILURE_MARKER: &str = "Validation Failed";

pub struct DataValidation {
    config: ValidationConfig,
    schema: DataSchema,
    ingestion: IngestionArtifact,
}

impl DataValidation {
    /// Load the schema eagerly; a broken schema file fails the stage before
    /// any table is read.
    pub fn new(config: ValidationConfig, ingestion: IngestionArtifact) -> Result<Self> {
        let schema = DataSchema::load(&config.schema_path)?;
        Ok(Self {
            config,
            schema,
            ingestion,
        })
    }

    /// Run all checks on both subsets and persist the report.
    pub fn initiate(&self) -> Result<ValidationArtifact> {
        let span = info_span!("data_validation");
        let _guard = span.enter();
        let start = Instant::now();

        let train = read_table(&self.ingestion.training_file_path)?;
        let test = read_table(&self.ingestion.testing_file_path)?;

        let mut reasons = Vec::new();
        self.check_subset("training", &train, &mut reasons);
        self.check_subset("testing", &test, &mut reasons);

        let validation_status = reasons.is_empty();
        reasons.push(if validation_status {
            SUCCESS_MARKER.to_string()
        } else {
            FAILURE_MARKER.to_string()
        });
        let message = reasons.join("; ");

        let report = ValidationReport {
            validation_status,
            message: message.clone(),
        };
        write_report(&self.config.report_path, &report)?;
        info!(
            validation_status,
            report = %self.config.report_path.display(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "data validation complete"
        );

        Ok(ValidationArtifact {
            report_path: self.config.report_path.clone(),
            validation_status,
            message,
        })
    }

    fn check_subset(&self, subset: &str, table: &RecordTable, reasons: &mut Vec<String>) {
        if !column_count_matches(table, &self.schema) {
            let reason = format!("{subset} data does not have the expected number of columns");
            error!(
                subset,
                actual = table.column_count(),
                expected = self.schema.expected_column_count(),
                "column count mismatch"
            );
            reasons.push(reason);
        }

        let missing_numerical = missing_required_columns(table, &self.schema.numerical_columns);
        if !missing_numerical.is_empty() {
            warn!(subset, columns = ?missing_numerical, "missing numerical columns");
        }
        let missing_categorical = missing_required_columns(table, &self.schema.categorical_columns);
        if !missing_categorical.is_empty() {
            warn!(subset, columns = ?missing_categorical, "missing categorical columns");
        }
        if !missing_numerical.is_empty() || !missing_categorical.is_empty() {
            reasons.push(format!("{subset} data is missing required columns"));
        }
    }
}
