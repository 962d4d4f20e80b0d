//! The data-ingestion stage: collection → feature store → train/test files.

use std::time::Instant;

use tracing::{info, info_span};

use vins_model::{IngestionArtifact, IngestionConfig, RecordTable, Result};
use vins_store::{DocumentSource, InsuranceRecords};

use crate::csv_io::write_table;
use crate::split::split_table;

pub struct DataIngestion<S> {
    config: IngestionConfig,
    records: InsuranceRecords<S>,
}

impl<S: DocumentSource> DataIngestion<S> {
    pub fn new(config: IngestionConfig, source: S) -> Self {
        Self {
            config,
            records: InsuranceRecords::new(source),
        }
    }

    /// Fetch the configured collection and persist it as the feature-store
    /// file, returning the in-memory table for the split step.
    pub fn export_to_feature_store(&self) -> Result<RecordTable> {
        info!(
            collection = %self.config.collection,
            "exporting collection to feature store"
        );
        let table = self.records.load_table(&self.config.collection)?;
        write_table(&self.config.feature_store_path, &table)?;
        info!(
            rows = table.row_count(),
            path = %self.config.feature_store_path.display(),
            "feature store written"
        );
        Ok(table)
    }

    /// Partition the table and persist both subsets.
    pub fn split_train_test(&self, table: &RecordTable) -> Result<()> {
        let (train, test) = split_table(table, self.config.split_ratio, self.config.seed)?;
        write_table(&self.config.training_file_path, &train)?;
        write_table(&self.config.testing_file_path, &test)?;
        info!(
            train_rows = train.row_count(),
            test_rows = test.row_count(),
            "train/test subsets written"
        );
        Ok(())
    }

    /// Run export then split. The artifact is only built once both subset
    /// files are on disk; any failure aborts the stage with no artifact.
    pub fn initiate(&self) -> Result<IngestionArtifact> {
        let span = info_span!("data_ingestion", collection = %self.config.collection);
        let _guard = span.enter();
        let start = Instant::now();
        let table = self.export_to_feature_store()?;
        self.split_train_test(&table)?;
        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "data ingestion complete"
        );
        Ok(IngestionArtifact {
            training_file_path: self.config.training_file_path.clone(),
            testing_file_path: self.config.testing_file_path.clone(),
        })
    }
}
