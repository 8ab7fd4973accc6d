//! Record storage: the in-memory content-addressed store and its
//! persistence hook.

pub mod memory;
pub mod snapshot;

use crate::error::Result;
use crate::record::Record;

pub use memory::RecordStore;
pub use snapshot::JsonSnapshot;

/// Callback invoked synchronously after each committed mutation.
///
/// The store calls `on_mutate` with the full record snapshot while still
/// holding its write lock, so hook invocations never overlap. Completion of
/// the hook is the durability commit point: a crash between the in-memory
/// mutation and the hook firing is the sole source of durability loss.
pub trait MutationHook: Send + Sync {
    fn on_mutate(&self, records: &[Record]) -> Result<()>;
}

/// A hook that does nothing, for purely in-memory stores.
#[derive(Debug, Default)]
pub struct NoopHook;

impl MutationHook for NoopHook {
    fn on_mutate(&self, _records: &[Record]) -> Result<()> {
        Ok(())
    }
}
