//! CLI command implementations.

pub mod demo;
pub mod list;
pub mod menu;

use libris_core::{Library, LibraryConfig, LibraryResult};
use libris_storage::JsonFileStore;
use tracing::info;

/// Opens the store named by `config` and loads the catalog from it.
pub fn open_library(config: &LibraryConfig) -> LibraryResult<(Library, JsonFileStore)> {
    info!("Loading library from {:?}", config.dir());
    let store = config.open_store();
    let mut library = Library::new();
    library.load_from_collections(&store, &config.collections())?;
    Ok((library, store))
}

/// Wraps `message` in the terminal escape codes for bright red.
pub fn red(message: &str) -> String {
    format!("\x1b[91m{message}\x1b[0m")
}
