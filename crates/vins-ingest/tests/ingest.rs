//! Integration tests for the ingestion stage against an in-memory source.

use std::path::Path;

use vins_ingest::{DataIngestion, read_table};
use vins_model::IngestionConfig;
use vins_store::MemorySource;
use vins_store::bson::{Bson, doc};

fn config(dir: &Path) -> IngestionConfig {
    IngestionConfig {
        feature_store_path: dir.join("feature_store/data.csv"),
        training_file_path: dir.join("ingested/train.csv"),
        testing_file_path: dir.join("ingested/test.csv"),
        collection: "policies".to_string(),
        split_ratio: 0.2,
        seed: Some(42),
    }
}

fn policy_documents(count: usize) -> MemorySource {
    let documents = (0..count)
        .map(|idx| {
            doc! {
                "Gender": if idx % 2 == 0 { "Male" } else { "Female" },
                "Age": 20 + (idx as i32 % 50),
                "Annual_Premium": 2630.0 + idx as f64,
                "Vehicle_Damage": if idx % 7 == 0 { Bson::String("na".to_string()) } else { Bson::String("Yes".to_string()) },
            }
        })
        .collect();
    MemorySource::new(documents)
}

#[test]
fn export_row_count_matches_document_count() {
    let dir = tempfile::tempdir().unwrap();
    let ingestion = DataIngestion::new(config(dir.path()), policy_documents(100));
    let table = ingestion.export_to_feature_store().unwrap();
    assert_eq!(table.row_count(), 100);

    let persisted = read_table(&dir.path().join("feature_store/data.csv")).unwrap();
    assert_eq!(persisted.row_count(), 100);
    assert!(!persisted.has_column("_id"));
}

#[test]
fn na_sentinels_become_empty_cells_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let ingestion = DataIngestion::new(config(dir.path()), policy_documents(14));
    ingestion.export_to_feature_store().unwrap();

    let persisted = read_table(&dir.path().join("feature_store/data.csv")).unwrap();
    let damage_idx = persisted
        .headers
        .iter()
        .position(|header| header == "Vehicle_Damage")
        .unwrap();
    assert_eq!(persisted.rows[0][damage_idx], "");
    assert_eq!(persisted.rows[1][damage_idx], "Yes");
}

#[test]
fn hundred_documents_split_eighty_twenty() {
    let dir = tempfile::tempdir().unwrap();
    let ingestion = DataIngestion::new(config(dir.path()), policy_documents(100));
    let artifact = ingestion.initiate().unwrap();

    let train = read_table(&artifact.training_file_path).unwrap();
    let test = read_table(&artifact.testing_file_path).unwrap();
    assert_eq!(train.row_count(), 80);
    assert_eq!(test.row_count(), 20);
    assert_eq!(train.headers, test.headers);
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    DataIngestion::new(config(dir_a.path()), policy_documents(40))
        .initiate()
        .unwrap();
    DataIngestion::new(config(dir_b.path()), policy_documents(40))
        .initiate()
        .unwrap();

    let train_a = read_table(&dir_a.path().join("ingested/train.csv")).unwrap();
    let train_b = read_table(&dir_b.path().join("ingested/train.csv")).unwrap();
    assert_eq!(train_a, train_b);
}
