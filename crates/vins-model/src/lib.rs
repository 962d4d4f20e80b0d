pub mod artifact;
pub mod config;
pub mod error;
pub mod schema;
pub mod table;

pub use artifact::{IngestionArtifact, ValidationArtifact};
pub use config::{IngestionConfig, PipelineConfig, PipelineOptions, ValidationConfig};
pub use error::{PipelineError, Result};
pub use schema::{ColumnSpec, DataSchema};
pub use table::{MISSING_VALUE, RecordTable};
