//! Per-run configuration for the training pipeline.
//!
//! A [`PipelineConfig`] is built once at startup from CLI arguments plus the
//! constants below, and every path it contains lives under a timestamped run
//! directory so successive runs never clobber each other's artifacts.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Environment variable holding the document-store connection string.
pub const MONGODB_URL_ENV: &str = "VINS_MONGODB_URL";

/// Default database holding the insurance collections.
pub const DATABASE_NAME: &str = "vehicle_insurance";

/// Default collection queried by the ingestion stage.
pub const DEFAULT_COLLECTION: &str = "policies";

/// Default root directory for run artifacts.
pub const ARTIFACT_DIR: &str = "artifact";

/// Default path of the dataset schema file.
pub const DEFAULT_SCHEMA_FILE: &str = "config/schema.json";

/// Default fraction of rows routed to the test subset.
pub const DEFAULT_SPLIT_RATIO: f64 = 0.25;

pub const INGESTION_DIR: &str = "data_ingestion";
pub const FEATURE_STORE_DIR: &str = "feature_store";
pub const INGESTED_DIR: &str = "ingested";
pub const FEATURE_STORE_FILE: &str = "data.csv";
pub const TRAIN_FILE: &str = "train.csv";
pub const TEST_FILE: &str = "test.csv";

pub const VALIDATION_DIR: &str = "data_validation";
pub const REPORT_FILE: &str = "report.json";

/// Timestamp format used for run directory names, e.g. `08072026_153012`.
const RUN_DIR_FORMAT: &str = "%m%d%Y_%H%M%S";

/// Configuration for the data-ingestion stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    pub feature_store_path: PathBuf,
    pub training_file_path: PathBuf,
    pub testing_file_path: PathBuf,
    pub collection: String,
    pub split_ratio: f64,
    /// Optional RNG seed; `None` means a fresh shuffle every run.
    pub seed: Option<u64>,
}

/// Configuration for the data-validation stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub schema_path: PathBuf,
    pub report_path: PathBuf,
}

/// Complete configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub run_dir: PathBuf,
    pub ingestion: IngestionConfig,
    pub validation: ValidationConfig,
}

/// Inputs needed to derive a [`PipelineConfig`].
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub artifact_root: PathBuf,
    pub collection: String,
    pub schema_path: PathBuf,
    pub split_ratio: f64,
    pub seed: Option<u64>,
}

impl PipelineConfig {
    /// Derive all stage paths for a run started at `started_at`.
    ///
    /// Fails with [`PipelineError::InvalidRatio`] when the split ratio is not
    /// strictly between 0 and 1.
    pub fn new(options: PipelineOptions, started_at: DateTime<Local>) -> Result<Self> {
        if !(options.split_ratio > 0.0 && options.split_ratio < 1.0) {
            return Err(PipelineError::InvalidRatio(options.split_ratio));
        }
        let run_dir = options
            .artifact_root
            .join(started_at.format(RUN_DIR_FORMAT).to_string());
        let ingestion_dir = run_dir.join(INGESTION_DIR);
        let validation_dir = run_dir.join(VALIDATION_DIR);
        Ok(Self {
            ingestion: IngestionConfig {
                feature_store_path: ingestion_dir.join(FEATURE_STORE_DIR).join(FEATURE_STORE_FILE),
                training_file_path: ingestion_dir.join(INGESTED_DIR).join(TRAIN_FILE),
                testing_file_path: ingestion_dir.join(INGESTED_DIR).join(TEST_FILE),
                collection: options.collection,
                split_ratio: options.split_ratio,
                seed: options.seed,
            },
            validation: ValidationConfig {
                schema_path: options.schema_path,
                report_path: validation_dir.join(REPORT_FILE),
            },
            run_dir,
        })
    }
}

impl PipelineOptions {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            artifact_root: PathBuf::from(ARTIFACT_DIR),
            collection: collection.into(),
            schema_path: PathBuf::from(DEFAULT_SCHEMA_FILE),
            split_ratio: DEFAULT_SPLIT_RATIO,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_artifact_root(mut self, root: &Path) -> Self {
        self.artifact_root = root.to_path_buf();
        self
    }

    #[must_use]
    pub fn with_schema_path(mut self, path: &Path) -> Self {
        self.schema_path = path.to_path_buf();
        self
    }

    #[must_use]
    pub fn with_split_ratio(mut self, ratio: f64) -> Self {
        self.split_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 7, 15, 30, 12).unwrap()
    }

    #[test]
    fn paths_live_under_timestamped_run_dir() {
        let options =
            PipelineOptions::new("policies").with_artifact_root(Path::new("/tmp/artifacts"));
        let config = PipelineConfig::new(options, fixed_start()).unwrap();
        assert_eq!(config.run_dir, Path::new("/tmp/artifacts/08072026_153012"));
        assert!(
            config
                .ingestion
                .training_file_path
                .starts_with(&config.run_dir)
        );
        assert!(config.validation.report_path.starts_with(&config.run_dir));
        assert_eq!(
            config.ingestion.feature_store_path.file_name().unwrap(),
            FEATURE_STORE_FILE
        );
    }

    #[test]
    fn ratio_bounds_are_exclusive() {
        for ratio in [0.0, 1.0, -0.2, 1.5] {
            let options = PipelineOptions::new("policies").with_split_ratio(ratio);
            assert!(matches!(
                PipelineConfig::new(options, fixed_start()),
                Err(PipelineError::InvalidRatio(_))
            ));
        }
    }
}
