//! Conversion between live entities and plain records.

mod codec;
pub(crate) mod fields;

pub use codec::RecordCodec;
pub use libris_storage::Record;
