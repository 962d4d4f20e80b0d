pub mod checks;
pub mod report;
pub mod validation;

pub use checks::{column_count_matches, missing_required_columns};
pub use report::{ValidationReport, read_report, write_report};
pub use validation::DataValidation;
