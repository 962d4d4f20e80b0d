pub mod client;
pub mod records;

pub use client::StoreClient;
pub use records::{DocumentSource, InsuranceRecords, MemorySource};

// Re-exported so downstream crates and tests can build documents without
// depending on the driver directly.
pub use mongodb::bson;
