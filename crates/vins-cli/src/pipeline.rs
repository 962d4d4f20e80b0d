//! Training pipeline with explicit stages.
//!
//! The pipeline runs these stages in order:
//! 1. **Data ingestion**: export the collection to the feature store and
//!    split it into train/test files
//! 2. **Data validation**: check both files against the dataset schema and
//!    write the validation report
//!
//! Each stage consumes the previous stage's artifact; the first failing
//! stage aborts the run and later stages never execute. Transformation and
//! model-training stages will slot in after validation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use vins_ingest::DataIngestion;
use vins_model::{IngestionArtifact, PipelineConfig, ValidationArtifact};
use vins_store::DocumentSource;
use vins_validate::DataValidation;

/// Outcome of a complete pipeline run, used for the CLI summary.
#[derive(Debug)]
pub struct PipelineRunSummary {
    pub run_dir: PathBuf,
    pub ingestion: IngestionArtifact,
    pub validation: ValidationArtifact,
    pub elapsed_ms: u64,
}

pub struct TrainingPipeline<S> {
    config: PipelineConfig,
    source: S,
}

impl<S: DocumentSource> TrainingPipeline<S> {
    pub fn new(config: PipelineConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn start_ingestion(&self) -> Result<IngestionArtifact> {
        DataIngestion::new(self.config.ingestion.clone(), &self.source)
            .initiate()
            .context("data ingestion stage")
    }

    fn start_validation(&self, ingestion: &IngestionArtifact) -> Result<ValidationArtifact> {
        DataValidation::new(self.config.validation.clone(), ingestion.clone())
            .context("data validation stage")?
            .initiate()
            .context("data validation stage")
    }

    /// Run ingestion then validation, threading the artifact forward.
    pub fn run(&self) -> Result<PipelineRunSummary> {
        info!(run_dir = %self.config.run_dir.display(), "starting training pipeline");
        let start = Instant::now();
        let ingestion = self.start_ingestion()?;
        let validation = self.start_validation(&ingestion)?;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(elapsed_ms, "training pipeline finished");
        Ok(PipelineRunSummary {
            run_dir: self.config.run_dir.clone(),
            ingestion,
            validation,
            elapsed_ms,
        })
    }
}
