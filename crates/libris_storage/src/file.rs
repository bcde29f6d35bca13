//! JSON file record store for persistent storage.

use crate::error::{StorageError, StorageResult};
use crate::store::{Record, RecordStore};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// A record store backed by one JSON file per collection.
///
/// Collection `books` lives at `<dir>/books.json` as a JSON array of
/// objects. Data survives process restarts.
///
/// # Durability
///
/// Each save writes a sibling `.tmp` file, syncs it, renames it over the
/// target and then syncs the directory, so a single collection is never
/// left half-written and a finished save survives a crash. Saving two
/// collections is two independent writes.
///
/// # Example
///
/// ```no_run
/// use libris_storage::{JsonFileStore, RecordStore};
/// use std::path::Path;
///
/// let mut store = JsonFileStore::open(Path::new("data"));
/// store.save_records("books", &[]).unwrap();
/// assert!(store.load_records("books").unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`.
    ///
    /// Nothing is touched on disk until the first save, which creates
    /// the directory if needed.
    #[must_use]
    pub fn open(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            pretty: true,
        }
    }

    /// Sets whether files are written with 4-space indentation.
    #[must_use]
    pub fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }

    /// Returns the root directory of the store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `collection`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or would escape the
    /// store directory.
    pub fn collection_path(&self, collection: &str) -> StorageResult<PathBuf> {
        let valid = !collection.is_empty()
            && collection != "."
            && collection != ".."
            && !collection.contains(['/', '\\']);
        if !valid {
            return Err(StorageError::InvalidCollection(collection.to_string()));
        }
        Ok(self.dir.join(format!("{collection}.json")))
    }

    /// Flushes the directory entry so a completed rename survives a crash.
    #[cfg(unix)]
    fn sync_dir(&self) -> StorageResult<()> {
        File::open(&self.dir)?.sync_all()?;
        Ok(())
    }

    /// NTFS journals renames; there is no directory handle to sync.
    #[cfg(not(unix))]
    fn sync_dir(&self) -> StorageResult<()> {
        Ok(())
    }

    fn encode(&self, records: &[Record], out: impl Write) -> StorageResult<()> {
        if self.pretty {
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(out, formatter);
            serde::Serialize::serialize(records, &mut ser).map_err(StorageError::Serialize)
        } else {
            serde_json::to_writer(out, records).map_err(StorageError::Serialize)
        }
    }
}

impl RecordStore for JsonFileStore {
    fn save_records(&mut self, collection: &str, records: &[Record]) -> StorageResult<()> {
        let path = self.collection_path(collection)?;
        fs::create_dir_all(&self.dir)?;

        let tmp_path = path.with_extension("json.tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            self.encode(records, &mut writer)?;
            writer.write_all(b"\n")?;
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &path)?;
        self.sync_dir()?;

        Ok(())
    }

    fn load_records(&self, collection: &str) -> StorageResult<Vec<Record>> {
        let path = self.collection_path(collection)?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let value: Value =
            serde_json::from_str(&text).map_err(|e| StorageError::parse(&path, e.to_string()))?;
        let Value::Array(items) = value else {
            return Err(StorageError::parse(&path, "expected a JSON array"));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                _ => Err(StorageError::parse(
                    &path,
                    format!("element {index} is not an object"),
                )),
            })
            .collect()
    }
}
