//! CSV read/write for feature-store, train and test files.
//!
//! Format: header row, comma-separated values, no index column. Parent
//! directories are created on write; an existing file is overwritten.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use vins_model::{PipelineError, RecordTable, Result};

pub fn read_table(path: &Path) -> Result<RecordTable> {
    let file = File::open(path).map_err(|error| PipelineError::io("open", path, error))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));
    let headers = reader
        .headers()
        .map_err(|error| PipelineError::csv(path, error))?
        .iter()
        .map(str::to_string)
        .collect();
    let mut table = RecordTable::new(headers);
    for record in reader.records() {
        let record = record.map_err(|error| PipelineError::csv(path, error))?;
        table.push_row(record.iter().map(str::to_string).collect());
    }
    Ok(table)
}

pub fn write_table(path: &Path, table: &RecordTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|error| PipelineError::io("create directory", parent, error))?;
    }
    let file = File::create(path).map_err(|error| PipelineError::io("create", path, error))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    writer
        .write_record(&table.headers)
        .map_err(|error| PipelineError::csv(path, error))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|error| PipelineError::csv(path, error))?;
    }
    writer
        .flush()
        .map_err(|error| PipelineError::io("flush", path, error))?;
    Ok(())
}
