use std::path::{Path, PathBuf};

use thiserror::Error;

/// Boxed underlying cause for failures that originate outside this workspace.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a pipeline stage.
///
/// Every variant carries enough context (operation, path, collection) to be
/// actionable from the top-level log line alone; the underlying cause is
/// preserved as `source()` for chain printing.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("document store unreachable during {operation}")]
    Connection {
        operation: String,
        #[source]
        source: Cause,
    },

    #[error("collection '{collection}' returned no documents")]
    EmptyCollection { collection: String },

    #[error("{operation} failed for {}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed tabular data in {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: Cause,
    },

    #[error("schema file {} is invalid: {detail}", .path.display())]
    Schema { path: PathBuf, detail: String },

    #[error("validation report {} could not be serialized", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: Cause,
    },

    #[error("train/test split ratio must be within (0, 1), got {0}")]
    InvalidRatio(f64),
}

impl PipelineError {
    pub fn connection(operation: impl Into<String>, source: impl Into<Cause>) -> Self {
        Self::Connection {
            operation: operation.into(),
            source: source.into(),
        }
    }

    pub fn io(operation: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn csv(path: &Path, source: impl Into<Cause>) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub fn schema(path: &Path, detail: impl Into<String>) -> Self {
        Self::Schema {
            path: path.to_path_buf(),
            detail: detail.into(),
        }
    }

    pub fn report(path: &Path, source: impl Into<Cause>) -> Self {
        Self::Report {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
