//! In-memory record store keyed by content hash.

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::error::{LexstoreError, Result};
use crate::record::Record;
use crate::storage::{MutationHook, NoopHook};

/// A content-addressed store mapping record id to record.
///
/// Holds at most one record per id. Records are kept in insertion order,
/// which is the order `list_all` returns. A single `RwLock` serializes
/// mutations against each other and against snapshot reads; `get` and
/// `list_all` may run concurrently with each other.
pub struct RecordStore {
    records: RwLock<Vec<Record>>,
    hook: Arc<dyn MutationHook>,
}

impl RecordStore {
    /// Create an empty store with no persistence.
    pub fn new() -> Self {
        Self::with_hook(Arc::new(NoopHook))
    }

    /// Create an empty store with the given mutation hook.
    pub fn with_hook(hook: Arc<dyn MutationHook>) -> Self {
        RecordStore {
            records: RwLock::new(Vec::new()),
            hook,
        }
    }

    /// Create a store pre-populated with `records` (e.g. from a loaded
    /// snapshot). The hook is not invoked for the initial contents.
    pub fn with_records(records: Vec<Record>, hook: Arc<dyn MutationHook>) -> Self {
        RecordStore {
            records: RwLock::new(records),
            hook,
        }
    }

    /// Insert a record, failing with `Conflict` if its id is already present.
    ///
    /// The mutation hook runs after the in-memory commit, inside the write
    /// critical section. A hook failure is reported to the caller; the
    /// in-memory insertion has already taken effect.
    pub fn insert(&self, record: Record) -> Result<Record> {
        let mut records = self.records.write();
        if records.iter().any(|r| r.id == record.id) {
            return Err(LexstoreError::conflict(format!(
                "record already exists for content hash {}",
                record.id
            )));
        }
        records.push(record.clone());
        debug!("inserted record {} ({} stored)", record.id, records.len());
        self.hook.on_mutate(&records)?;
        Ok(record)
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Result<Record> {
        let records = self.records.read();
        records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| LexstoreError::not_found(format!("no record with id {id}")))
    }

    /// Delete a record by id, failing with `NotFound` on a miss.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.write();
        let position = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| LexstoreError::not_found(format!("no record with id {id}")))?;
        records.remove(position);
        debug!("deleted record {id} ({} stored)", records.len());
        self.hook.on_mutate(&records)?;
        Ok(())
    }

    /// Snapshot of all records in insertion order.
    pub fn list_all(&self) -> Vec<Record> {
        self.records.read().clone()
    }

    /// Number of records stored.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
