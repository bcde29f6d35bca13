//! Typed field access on plain records.

use crate::error::{LibraryError, LibraryResult};
use crate::record::Record;
use crate::validate::parse_user_id;
use serde_json::Value;

/// Reads a required string field.
pub(crate) fn text<'r>(
    record: &'r Record,
    collection: &'static str,
    key: &str,
) -> LibraryResult<&'r str> {
    match record.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(LibraryError::invalid_record(
            collection,
            format!("field '{key}' must be a string, got {other}"),
        )),
        None => Err(missing(collection, key)),
    }
}

/// Reads a required user ID field given either as a JSON integer or as
/// a decimal string.
pub(crate) fn user_id(record: &Record, collection: &'static str, key: &str) -> LibraryResult<i64> {
    match record.get(key) {
        Some(Value::String(s)) => parse_user_id(s).map(i64::from),
        Some(value) => value.as_i64().ok_or_else(|| {
            LibraryError::invalid_field("user ID", "must be a positive integer")
        }),
        None => Err(missing(collection, key)),
    }
}

fn missing(collection: &'static str, key: &str) -> LibraryError {
    LibraryError::invalid_record(collection, format!("missing field '{key}'"))
}
