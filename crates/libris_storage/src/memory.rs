//! In-memory record store for testing.

use crate::error::{StorageError, StorageResult};
use crate::store::{Record, RecordStore};
use parking_lot::RwLock;
use std::collections::HashMap;

/// An in-memory record store.
///
/// This store keeps every collection in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Sessions that don't need persistence
///
/// # Example
///
/// ```rust
/// use libris_storage::{InMemoryStore, RecordStore};
///
/// let mut store = InMemoryStore::new();
/// store.save_records("users", &[]).unwrap();
/// assert!(store.contains("users"));
/// assert!(!store.contains("books"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Vec<Record>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one pre-populated collection.
    ///
    /// Useful for testing load paths.
    #[must_use]
    pub fn with_collection(collection: &str, records: Vec<Record>) -> Self {
        let store = Self::new();
        store
            .collections
            .write()
            .insert(collection.to_string(), records);
        store
    }

    /// Returns whether `collection` has ever been saved.
    #[must_use]
    pub fn contains(&self, collection: &str) -> bool {
        self.collections.read().contains_key(collection)
    }

    /// Removes every collection.
    pub fn clear(&mut self) {
        self.collections.write().clear();
    }
}

impl RecordStore for InMemoryStore {
    fn save_records(&mut self, collection: &str, records: &[Record]) -> StorageResult<()> {
        if collection.is_empty() {
            return Err(StorageError::InvalidCollection(collection.to_string()));
        }
        self.collections
            .write()
            .insert(collection.to_string(), records.to_vec());
        Ok(())
    }

    fn load_records(&self, collection: &str) -> StorageResult<Vec<Record>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}
