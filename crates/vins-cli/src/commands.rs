//! Wiring from parsed CLI arguments to a pipeline run.

use anyhow::{Context, Result};
use chrono::Local;

use vins_cli::pipeline::{PipelineRunSummary, TrainingPipeline};
use vins_model::{PipelineConfig, PipelineOptions};
use vins_store::StoreClient;

use crate::cli::RunArgs;

pub fn run_pipeline(args: &RunArgs) -> Result<PipelineRunSummary> {
    let options = PipelineOptions::new(args.collection.clone())
        .with_artifact_root(&args.artifact_dir)
        .with_schema_path(&args.schema)
        .with_split_ratio(args.ratio)
        .with_seed(args.seed);
    let config = PipelineConfig::new(options, Local::now()).context("pipeline configuration")?;
    let client = StoreClient::from_env(&args.database).context("document store setup")?;
    TrainingPipeline::new(config, client).run()
}
