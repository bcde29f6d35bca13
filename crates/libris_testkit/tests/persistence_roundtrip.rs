//! Saving and reloading catalogs through the JSON file store.

use libris_core::{Library, LibraryConfig};
use libris_storage::RecordStore;
use libris_testkit::{scenarios, with_temp_store, TestLibrary};

#[test]
fn catalog_survives_reload() {
    let mut fixture = TestLibrary::with_library(scenarios::populated_library(7, 4));
    fixture.save();

    let loaded = fixture.reload();

    assert_eq!(loaded.book_count(), 7);
    assert_eq!(loaded.user_count(), 4);
    for (saved, loaded) in fixture.books().iter().zip(loaded.books()) {
        assert_eq!(saved.title(), loaded.title());
        assert_eq!(saved.author(), loaded.author());
    }
    for (saved, loaded) in fixture.users().iter().zip(loaded.users()) {
        assert_eq!(saved.user_id(), loaded.user_id());
        assert_eq!(saved.name(), loaded.name());
    }
}

#[test]
fn lending_state_resets_on_reload() {
    let mut fixture = TestLibrary::with_library(scenarios::library_with_full_user());
    fixture.save();

    let loaded = fixture.reload();

    assert!(loaded.books().iter().all(|b| !b.is_checked_out()));
    assert!(loaded.users().iter().all(|u| u.borrowed_count() == 0));
}

#[test]
fn empty_directory_loads_empty_catalog() {
    let fixture = TestLibrary::file();
    let loaded = fixture.reload();
    assert_eq!(loaded.book_count(), 0);
    assert_eq!(loaded.user_count(), 0);
}

#[test]
fn files_hold_the_record_shape() {
    with_temp_store(|store, dir| {
        let mut library = Library::new();
        library.add_book("Dune", "Frank Herbert").unwrap();
        library.register_user(1, "Maksym").unwrap();
        library.save_to(store).unwrap();

        let books: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join("books.json")).unwrap())
                .unwrap();
        let users: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join("users.json")).unwrap())
                .unwrap();

        assert_eq!(
            books,
            serde_json::json!([{ "title": "Dune", "author": "Frank Herbert" }])
        );
        assert_eq!(users, serde_json::json!([{ "user_id": 1, "name": "Maksym" }]));
    });
}

#[test]
fn malformed_record_fails_load_and_keeps_catalog() {
    with_temp_store(|store, _| {
        let mut library = scenarios::populated_library(2, 1);
        library.save_to(store).unwrap();

        let bad = serde_json::json!({ "title": "Sci-Fi!", "author": "X" });
        let serde_json::Value::Object(record) = bad else {
            unreachable!()
        };
        store.save_records("books", &[record]).unwrap();

        assert!(library.load_from(store).is_err());
        assert_eq!(library.book_count(), 2);
    });
}

#[test]
fn config_store_writes_under_data_dir() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = LibraryConfig::default().data_dir(temp.path().join("catalog"));
    let mut store = config.open_store();

    scenarios::populated_library(1, 1).save_to(&mut store).unwrap();

    assert!(temp.path().join("catalog").join("books.json").exists());
    assert!(temp.path().join("catalog").join("users.json").exists());
}
