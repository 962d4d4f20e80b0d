//! Immutable records handed from one pipeline stage to the next.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output of the data-ingestion stage.
///
/// Only constructed after both split files have been durably written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionArtifact {
    pub training_file_path: PathBuf,
    pub testing_file_path: PathBuf,
}

/// Terminal output of the data-validation stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationArtifact {
    pub report_path: PathBuf,
    pub validation_status: bool,
    pub message: String,
}
