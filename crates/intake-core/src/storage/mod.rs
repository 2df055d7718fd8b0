//! Record persistence.
//!
//! The wizard only ever appends: a completed record is written exactly once,
//! on confirmation, and the whole collection is read back at startup to seat
//! the next sequential identifier.

mod jsonl;
mod memory;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::record::PersonRecord;

/// Flat storage for committed records.
pub trait RecordStore {
    /// Read every committed record, oldest first.
    ///
    /// An absent or empty backing file yields an empty collection; only
    /// malformed content is an error.
    fn load_all(&self) -> Result<Vec<PersonRecord>>;

    /// Durably persist one record, with its spouse sub-record when present,
    /// before returning. Creates the backing location on first use.
    fn append(&mut self, record: &PersonRecord) -> Result<()>;
}
