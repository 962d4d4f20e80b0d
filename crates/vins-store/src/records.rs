//! Materializes a document collection as a [`RecordTable`].

use mongodb::bson::{Bson, Document, doc};
use tracing::{debug, info};

use vins_model::{PipelineError, RecordTable, Result};

use crate::client::StoreClient;

/// Store-generated identity field, dropped during materialization.
const ID_FIELD: &str = "_id";

/// Sentinel string used by upstream loaders to mean "missing".
const NA_SENTINEL: &str = "na";

/// Source of raw documents for a named collection.
///
/// [`StoreClient`] is the production implementation; [`MemorySource`] backs
/// tests and offline runs.
pub trait DocumentSource {
    fn fetch_all(&self, collection: &str) -> Result<Vec<Document>>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn fetch_all(&self, collection: &str) -> Result<Vec<Document>> {
        (**self).fetch_all(collection)
    }
}

impl DocumentSource for StoreClient {
    fn fetch_all(&self, collection: &str) -> Result<Vec<Document>> {
        let cursor = self
            .database()
            .collection::<Document>(collection)
            .find(doc! {})
            .run()
            .map_err(|error| {
                PipelineError::connection(format!("find on collection '{collection}'"), error)
            })?;
        let mut documents = Vec::new();
        for document in cursor {
            let document = document.map_err(|error| {
                PipelineError::connection(format!("cursor read on collection '{collection}'"), error)
            })?;
            documents.push(document);
        }
        debug!(collection, count = documents.len(), "fetched documents");
        Ok(documents)
    }
}

/// Fixed set of in-memory documents, returned for any collection name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<Document>,
}

impl MemorySource {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

impl DocumentSource for MemorySource {
    fn fetch_all(&self, _collection: &str) -> Result<Vec<Document>> {
        Ok(self.documents.clone())
    }
}

/// Data-access layer for the insurance dataset.
pub struct InsuranceRecords<S> {
    source: S,
}

impl<S: DocumentSource> InsuranceRecords<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch every document in `collection` and return it as a table.
    ///
    /// The identity field is dropped, and both BSON nulls and literal
    /// `"na"` strings become the canonical missing-value marker. A
    /// collection that yields zero documents is an error.
    pub fn load_table(&self, collection: &str) -> Result<RecordTable> {
        let documents = self.source.fetch_all(collection)?;
        if documents.is_empty() {
            return Err(PipelineError::EmptyCollection {
                collection: collection.to_string(),
            });
        }
        let table = table_from_documents(&documents);
        info!(
            collection,
            rows = table.row_count(),
            columns = table.column_count(),
            "collection materialized"
        );
        Ok(table)
    }
}

/// Columns are the union of document keys in first-seen order, minus the
/// identity field; documents missing a key contribute an empty cell.
fn table_from_documents(documents: &[Document]) -> RecordTable {
    let mut headers: Vec<String> = Vec::new();
    for document in documents {
        for key in document.keys() {
            if key != ID_FIELD && !headers.iter().any(|header| header == key) {
                headers.push(key.clone());
            }
        }
    }
    let mut table = RecordTable::new(headers.clone());
    for document in documents {
        let row = headers
            .iter()
            .map(|header| document.get(header).map(render_cell).unwrap_or_default())
            .collect();
        table.push_row(row);
    }
    table
}

fn render_cell(value: &Bson) -> String {
    match value {
        Bson::String(text) if text == NA_SENTINEL => String::new(),
        Bson::String(text) => text.clone(),
        Bson::Int32(number) => number.to_string(),
        Bson::Int64(number) => number.to_string(),
        Bson::Double(number) => number.to_string(),
        Bson::Boolean(flag) => flag.to_string(),
        Bson::Null => String::new(),
        other => other.to_string(),
    }
}
