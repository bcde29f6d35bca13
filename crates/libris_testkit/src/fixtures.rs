//! Test fixtures and catalog helpers.
//!
//! Provides convenience functions for setting up catalogs and stores in
//! tests.

use libris_core::Library;
use libris_storage::{JsonFileStore, RecordStore};
use std::path::Path;
use tempfile::TempDir;

/// A catalog backed by a JSON store in a temporary directory.
pub struct TestLibrary {
    /// The catalog under test.
    pub library: Library,
    /// The store the catalog saves to.
    pub store: JsonFileStore,
    /// The temporary directory (kept alive to prevent cleanup).
    temp_dir: TempDir,
}

impl TestLibrary {
    /// Creates an empty catalog with a fresh temporary store.
    pub fn file() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = JsonFileStore::open(temp_dir.path());
        Self {
            library: Library::new(),
            store,
            temp_dir,
        }
    }

    /// Creates a fixture whose catalog is `library`.
    pub fn with_library(library: Library) -> Self {
        Self {
            library,
            ..Self::file()
        }
    }

    /// Returns the directory the store writes to.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Saves the catalog to the store.
    pub fn save(&mut self) {
        self.library
            .save_to(&mut self.store)
            .expect("Failed to save library");
    }

    /// Loads a fresh catalog from the store.
    pub fn reload(&self) -> Library {
        Library::open(&self.store).expect("Failed to load library")
    }
}

impl std::ops::Deref for TestLibrary {
    type Target = Library;

    fn deref(&self) -> &Self::Target {
        &self.library
    }
}

impl std::ops::DerefMut for TestLibrary {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.library
    }
}

/// Runs a test with a JSON store in a temporary directory.
///
/// # Example
///
/// ```rust
/// use libris_testkit::with_temp_store;
/// use libris_storage::RecordStore;
///
/// with_temp_store(|store, dir| {
///     store.save_records("books", &[]).unwrap();
///     assert!(dir.join("books.json").exists());
/// });
/// ```
pub fn with_temp_store<F, R>(f: F) -> R
where
    F: FnOnce(&mut JsonFileStore, &Path) -> R,
{
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut store = JsonFileStore::open(temp_dir.path());
    f(&mut store, temp_dir.path())
}

/// Saves `library` to `store` and loads it back.
pub fn round_trip(library: &Library, store: &mut dyn RecordStore) -> Library {
    library.save_to(store).expect("Failed to save library");
    Library::open(store).expect("Failed to load library")
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;

    /// Returns `count` distinct valid titles.
    pub fn titles(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("Book {i}")).collect()
    }

    /// Creates a catalog with `book_count` books titled `Book 0..` and
    /// `user_count` users with IDs `1..`.
    pub fn populated_library(book_count: usize, user_count: usize) -> Library {
        let mut library = Library::new();
        for (i, title) in titles(book_count).into_iter().enumerate() {
            library
                .add_book(title, format!("Author {i}"))
                .expect("Failed to add book");
        }
        for i in 1..=user_count {
            library
                .register_user(i as i64, format!("User {i}"))
                .expect("Failed to register user");
        }
        library
    }

    /// Creates a catalog where user 1 already holds the maximum number of
    /// books and one more book (`"Spare"`) is on the shelf.
    pub fn library_with_full_user() -> Library {
        let limit = libris_core::BORROW_LIMIT;
        let mut library = populated_library(limit, 1);
        library
            .add_book("Spare", "Author")
            .expect("Failed to add book");
        for title in titles(limit) {
            library
                .checkout_book(1, &title)
                .expect("Failed to check out book");
        }
        library
    }
}
