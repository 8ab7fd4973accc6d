//! The request/response boundary of the analysis-and-query engine.
//!
//! An [`Engine`] owns one [`RecordStore`] and exposes the five operations a
//! gateway drives: submit, fetch, query, natural-language query, and remove.
//! All lookups address records by content, so fetch and remove hash their
//! argument exactly the way submit does.

use std::path::PathBuf;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, content_hash, normalize};
use crate::error::{LexstoreError, Result};
use crate::query::{FilterParams, FilterSpec, translate};
use crate::record::Record;
use crate::storage::{JsonSnapshot, RecordStore};

/// Result of a structured query: the matching records in store order plus an
/// echo of the filters that were applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub records: Vec<Record>,
    pub filters: FilterSpec,
}

/// Result of a natural-language query: the matching records, the filter spec
/// the translator derived, and the original query text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlQueryResponse {
    pub records: Vec<Record>,
    pub filters: FilterSpec,
    pub query: String,
}

/// The analysis-and-query engine.
pub struct Engine {
    store: RecordStore,
}

impl Engine {
    /// Create an engine over an empty, purely in-memory store.
    pub fn new() -> Self {
        Engine {
            store: RecordStore::new(),
        }
    }

    /// Create an engine over an existing store.
    pub fn with_store(store: RecordStore) -> Self {
        Engine { store }
    }

    /// Create an engine persisted to a JSON snapshot file.
    ///
    /// Existing records are loaded wholesale at startup; every subsequent
    /// mutation rewrites the snapshot.
    pub fn with_snapshot<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let snapshot = JsonSnapshot::new(path);
        let records = snapshot.load()?;
        let store = RecordStore::with_records(records, Arc::new(snapshot));
        Ok(Engine { store })
    }

    /// The underlying store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Analyze and store a string.
    ///
    /// Fails with `InvalidInput` for a value that is empty after trimming,
    /// and with `Conflict` when the same normalized content is already
    /// stored.
    pub fn submit(&self, value: &str) -> Result<Record> {
        if value.trim().is_empty() {
            return Err(LexstoreError::invalid_input(
                "value must be a non-empty string",
            ));
        }
        let record = analyze(value);
        debug!("submit: analyzed {} chars into {}", record.properties.length, record.id);
        self.store.insert(record)
    }

    /// Look up the record whose content matches `value`.
    pub fn fetch(&self, value: &str) -> Result<Record> {
        let id = content_hash(&normalize(value));
        self.store.get(&id)
    }

    /// Delete the record whose content matches `value`.
    pub fn remove(&self, value: &str) -> Result<()> {
        let id = content_hash(&normalize(value));
        self.store.delete(&id)
    }

    /// Run a structured filter query.
    pub fn query(&self, params: FilterParams) -> Result<QueryResponse> {
        let filters = params.into_spec()?;
        filters.validate()?;
        let records = filters.apply(&self.store.list_all());
        debug!("query matched {} records", records.len());
        Ok(QueryResponse { records, filters })
    }

    /// Run a natural-language query.
    ///
    /// The query text must be non-empty; the translator itself never fails,
    /// but a derived spec with contradictory bounds ("longer than 9 shorter
    /// than 2") is rejected as `ConflictingFilters`.
    pub fn query_natural_language(&self, text: &str) -> Result<NlQueryResponse> {
        if text.trim().is_empty() {
            return Err(LexstoreError::invalid_input(
                "query text must be a non-empty string",
            ));
        }
        let filters = translate(text);
        filters.validate()?;
        let records = filters.apply(&self.store.list_all());
        debug!(
            "natural-language query {:?} matched {} records",
            text,
            records.len()
        );
        Ok(NlQueryResponse {
            records,
            filters,
            query: text.to_string(),
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
