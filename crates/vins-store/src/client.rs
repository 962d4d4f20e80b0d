//! Shared handle to the document store.
//!
//! One [`StoreClient`] is constructed per run (the underlying driver client
//! is internally pooled and cheap to clone), then injected into the
//! data-access layer. Construction reads the connection string from the
//! environment; the TCP/TLS handshake itself is lazy, so an unreachable
//! server surfaces on the first query rather than here.

use mongodb::sync::{Client, Database};
use tracing::info;

use vins_model::config::MONGODB_URL_ENV;
use vins_model::{PipelineError, Result};

#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    database: String,
}

impl StoreClient {
    /// Connect using the `VINS_MONGODB_URL` environment variable.
    pub fn from_env(database: &str) -> Result<Self> {
        let uri = std::env::var(MONGODB_URL_ENV).map_err(|_| {
            PipelineError::Configuration(format!(
                "environment variable {MONGODB_URL_ENV} is not set"
            ))
        })?;
        Self::with_uri(&uri, database)
    }

    /// Connect with an explicit connection string.
    pub fn with_uri(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .map_err(|error| PipelineError::connection("client construction", error))?;
        info!(database, "document store client initialized");
        Ok(Self {
            client,
            database: database.to_string(),
        })
    }

    pub fn database(&self) -> Database {
        self.client.database(&self.database)
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }
}
