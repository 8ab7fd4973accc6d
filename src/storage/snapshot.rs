//! JSON snapshot persistence for the record store.
//!
//! The persisted layout is a single flat JSON document holding every record,
//! loaded wholesale at startup and rewritten wholesale on every mutation.
//! There is no incremental or append log. Records are stored as an ordered
//! array (each element carries its own id) so insertion order survives a
//! reload.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::Result;
use crate::record::Record;
use crate::storage::MutationHook;

/// Persists the full record list to a JSON file on every mutation.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so readers never observe a partially written snapshot.
#[derive(Debug)]
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    /// Create a snapshot bound to the given file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        JsonSnapshot { path: path.into() }
    }

    /// The snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records from the snapshot file.
    ///
    /// A missing file is not an error: the store simply starts empty.
    pub fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            debug!("no snapshot at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            warn!("snapshot {} is empty, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let records: Vec<Record> = serde_json::from_str(&data)?;
        debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

impl MutationHook for JsonSnapshot {
    fn on_mutate(&self, records: &[Record]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;

        // Appends to the full file name rather than replacing the extension,
        // so snapshots sharing a stem ("store.json", "store.db") get distinct
        // temp files.
        let mut temp_name = self.path.as_os_str().to_os_string();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        debug!(
            "wrote snapshot of {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
