//! Library configuration.

use crate::entity::{Book, User};
use crate::record::RecordCodec;
use libris_storage::JsonFileStore;
use std::path::{Path, PathBuf};

/// Names of the record collections a catalog is saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collections {
    /// Collection holding book records.
    pub books: String,
    /// Collection holding user records.
    pub users: String,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            books: Book::COLLECTION.to_string(),
            users: User::COLLECTION.to_string(),
        }
    }
}

/// Configuration for a library session.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Directory holding one JSON file per collection.
    pub data_dir: PathBuf,

    /// Collection name for books.
    pub books_collection: String,

    /// Collection name for users.
    pub users_collection: String,

    /// Whether to write indented JSON.
    pub pretty_json: bool,

    /// Whether an interactive session saves the catalog when it ends.
    pub save_on_exit: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            books_collection: Book::COLLECTION.to_string(),
            users_collection: User::COLLECTION.to_string(),
            pretty_json: true,
            save_on_exit: true,
        }
    }
}

impl LibraryConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data directory.
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Sets the collection name for books.
    #[must_use]
    pub fn books_collection(mut self, name: impl Into<String>) -> Self {
        self.books_collection = name.into();
        self
    }

    /// Sets the collection name for users.
    #[must_use]
    pub fn users_collection(mut self, name: impl Into<String>) -> Self {
        self.users_collection = name.into();
        self
    }

    /// Sets whether to write indented JSON.
    #[must_use]
    pub const fn pretty_json(mut self, value: bool) -> Self {
        self.pretty_json = value;
        self
    }

    /// Sets whether to save when an interactive session ends.
    #[must_use]
    pub const fn save_on_exit(mut self, value: bool) -> Self {
        self.save_on_exit = value;
        self
    }

    /// Returns the data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the collection names the catalog is saved under.
    #[must_use]
    pub fn collections(&self) -> Collections {
        Collections {
            books: self.books_collection.clone(),
            users: self.users_collection.clone(),
        }
    }

    /// Opens the JSON file store this configuration points at.
    #[must_use]
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::open(&self.data_dir).pretty(self.pretty_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LibraryConfig::default();
        assert_eq!(config.dir(), Path::new("data"));
        assert_eq!(config.collections(), Collections::default());
        assert!(config.pretty_json);
        assert!(config.save_on_exit);
    }

    #[test]
    fn builder_pattern() {
        let config = LibraryConfig::new()
            .data_dir("/tmp/libris")
            .books_collection("catalog")
            .users_collection("members")
            .pretty_json(false)
            .save_on_exit(false);

        assert_eq!(config.dir(), Path::new("/tmp/libris"));
        assert!(!config.pretty_json);
        assert!(!config.save_on_exit);
        assert_eq!(config.collections().books, "catalog");
        assert_eq!(config.collections().users, "members");
    }

    #[test]
    fn store_uses_data_dir() {
        let config = LibraryConfig::new().data_dir("somewhere");
        assert_eq!(config.open_store().dir(), Path::new("somewhere"));
    }
}
