//! # Libris Storage
//!
//! Record store trait and implementations for Libris.
//!
//! Stores move **plain records** in and out of named collections. A
//! record is a flat, string-keyed JSON object; stores never interpret
//! the fields. Turning books and users into records is the job of
//! `libris_core`.
//!
//! ## Available Stores
//!
//! - [`InMemoryStore`] - For testing
//! - [`JsonFileStore`] - One pretty-printed JSON array per collection
//!
//! ## Example
//!
//! ```rust
//! use libris_storage::{InMemoryStore, Record, RecordStore};
//! use serde_json::json;
//!
//! let mut store = InMemoryStore::new();
//! let mut record = Record::new();
//! record.insert("title".into(), json!("Dune"));
//! store.save_records("books", &[record]).unwrap();
//!
//! let loaded = store.load_records("books").unwrap();
//! assert_eq!(loaded[0]["title"], "Dune");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod file;
mod memory;
mod store;

pub use error::{StorageError, StorageResult};
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use store::{Record, RecordStore};
