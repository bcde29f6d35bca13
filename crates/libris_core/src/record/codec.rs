//! Record codec trait for persisted entities.

use crate::error::LibraryResult;
use crate::record::Record;

/// Trait for entities that can be saved as plain records.
///
/// Implementors must provide:
/// - `COLLECTION`: the name of the record collection
/// - `to_record()`: the persisted fields only
/// - `from_record()`: a fresh entity built through the normal validators
///
/// Runtime state (checkout flags, borrowed lists) is never part of a
/// record; `from_record` always yields an entity in its initial state.
///
/// # Example
///
/// ```rust
/// use libris_core::{Book, RecordCodec};
///
/// let book = Book::new("Dune", "Frank Herbert").unwrap();
/// let record = book.to_record();
/// let copy = Book::from_record(&record).unwrap();
/// assert_eq!(copy.title(), "Dune");
/// ```
pub trait RecordCodec: Sized {
    /// Name of the collection records of this type are stored under.
    const COLLECTION: &'static str;

    /// Converts the entity into a plain record.
    fn to_record(&self) -> Record;

    /// Builds an entity from a plain record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LibraryError::InvalidRecord`] if a field is missing
    /// or has the wrong JSON type, and
    /// [`crate::LibraryError::InvalidField`] if a value fails validation.
    fn from_record(record: &Record) -> LibraryResult<Self>;

    /// Converts every entity in `entities` into records, in order.
    fn to_records<'a, I>(entities: I) -> Vec<Record>
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        entities.into_iter().map(Self::to_record).collect()
    }

    /// Builds one entity per record, failing on the first bad record.
    ///
    /// # Errors
    ///
    /// Returns the error of the first record that cannot be decoded.
    fn from_records(records: &[Record]) -> LibraryResult<Vec<Self>> {
        records.iter().map(Self::from_record).collect()
    }
}
