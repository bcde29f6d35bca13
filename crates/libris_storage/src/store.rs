//! Record store trait definition.

use crate::error::StorageResult;

/// A plain, flat, string-keyed record.
///
/// Records exist only for persistence I/O. They are distinct from the
/// live entities they were produced from.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// A store of named record collections.
///
/// Stores are **opaque** to the record contents. They load and save
/// whole collections at once.
///
/// # Invariants
///
/// - `load_records` returns exactly the records last passed to
///   `save_records` for that collection, in the same order
/// - `load_records` on a collection that was never saved returns an
///   empty list
/// - A single `save_records` call either replaces the whole collection
///   or leaves the previous contents in place
///
/// # Implementors
///
/// - [`super::InMemoryStore`] - For testing
/// - [`super::JsonFileStore`] - For persistent storage
pub trait RecordStore: Send + Sync {
    /// Replaces the contents of `collection` with `records`.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be written.
    fn save_records(&mut self, collection: &str, records: &[Record]) -> StorageResult<()>;

    /// Loads every record of `collection`.
    ///
    /// # Errors
    ///
    /// Returns an error if existing data cannot be read or is malformed.
    fn load_records(&self, collection: &str) -> StorageResult<Vec<Record>>;
}
