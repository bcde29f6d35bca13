//! Property tests driving random lending sequences through the catalog.

use libris_core::{Book, Library, User};
use libris_testkit::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(PropTestConfig::default().to_proptest_config())]

    #[test]
    fn invariants_hold_across_operations(ops in PropTestConfig::default().operation_sequence()) {
        let mut harness = LendingHarness::new();
        harness.apply_all(&ops);
        prop_assert_eq!(harness.succeeded() + harness.failed(), ops.len());
    }

    #[test]
    fn valid_fields_are_stored_exactly(
        title in title_strategy(),
        author in author_strategy(),
        user_id in user_id_strategy(),
        name in name_strategy(),
    ) {
        let book = Book::new(title.as_str(), author.as_str()).unwrap();
        prop_assert_eq!(book.title(), title.as_str());
        prop_assert_eq!(book.author(), author.as_str());

        let user = User::new(user_id, name.as_str()).unwrap();
        prop_assert_eq!(user.user_id().get(), user_id);
        prop_assert_eq!(user.name(), name.as_str());
    }

    #[test]
    fn invalid_fields_are_rejected(
        title in invalid_title_strategy(),
        user_id in invalid_user_id_strategy(),
    ) {
        prop_assert!(Book::new(title, "Author").is_err());
        prop_assert!(User::new(user_id, "Name").is_err());
    }
}

proptest! {
    #![proptest_config(PropTestConfig::thorough().to_proptest_config())]

    #[test]
    fn invariants_hold_on_a_stocked_catalog(ops in PropTestConfig::thorough().operation_sequence()) {
        let mut library = Library::new();
        for title in TITLE_POOL {
            library.add_book(*title, "Author").unwrap();
        }
        for user_id in 1..=MAX_POOL_USER_ID {
            library.register_user(user_id, format!("User {user_id}")).unwrap();
        }

        let mut harness = LendingHarness::with_library(library);
        harness.apply_all(&ops);
        prop_assert_eq!(harness.succeeded() + harness.failed(), ops.len());
    }
}

proptest! {
    #![proptest_config(PropTestConfig::quick().to_proptest_config())]

    #[test]
    fn reload_keeps_catalog_and_resets_state(
        ops in PropTestConfig::quick().operation_sequence(),
        catalog in catalog_strategy(6),
    ) {
        let mut harness = LendingHarness::new();
        for (title, author) in &catalog {
            harness.library.add_book(title.as_str(), author.as_str()).unwrap();
        }
        harness.apply_all(&ops);

        let mut fixture = TestLibrary::with_library(harness.library);
        fixture.save();
        let loaded: Library = fixture.reload();

        prop_assert_eq!(loaded.book_count(), fixture.book_count());
        prop_assert_eq!(loaded.user_count(), fixture.user_count());
        for (saved, loaded) in fixture.books().iter().zip(loaded.books()) {
            prop_assert_eq!(saved.title(), loaded.title());
            prop_assert_eq!(saved.author(), loaded.author());
            prop_assert!(!loaded.is_checked_out());
        }
        for (saved, loaded) in fixture.users().iter().zip(loaded.users()) {
            prop_assert_eq!(saved.user_id(), loaded.user_id());
            prop_assert_eq!(saved.name(), loaded.name());
            prop_assert!(loaded.borrowed_books().is_empty());
        }
        check_invariants(&loaded);
    }
}
