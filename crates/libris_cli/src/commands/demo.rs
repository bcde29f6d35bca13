//! Scripted demo: seeds sample data and exercises the lending rules.

use crate::commands::menu::Menu;
use crate::commands::{open_library, red};
use libris_core::{Book, Collections, Library, LibraryConfig, LibraryResult, User};
use libris_storage::RecordStore;
use std::io::{self, Write};
use tracing::info;

const SAMPLE_BOOKS: [(&str, &str); 5] = [
    ("Python for Beginners", "Unknown"),
    ("Advanced Python", "John Doe"),
    ("Data Science Essentials", "Jane Smith"),
    ("Machine Learning Basics", "Emily Johnson"),
    ("Deep Learning Fundamentals", "Michael Brown"),
];

const SAMPLE_USERS: [(i64, &str); 3] = [(1, "Maksym"), (2, "Olha"), (3, "Ihor")];

/// Runs the demo against the catalog in `config`, then optionally the menu.
pub fn run(
    config: &LibraryConfig,
    then_menu: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (mut library, mut store) = open_library(config)?;
    info!(
        books = library.book_count(),
        users = library.user_count(),
        "Running demo"
    );

    let stdout = io::stdout();
    let collections = config.collections();
    script(&mut library, &mut store, &collections, &mut stdout.lock())?;

    if then_menu {
        let mut menu = Menu::new(&mut library, &mut store, io::stdin().lock(), stdout.lock());
        menu.save_on_exit(config.save_on_exit);
        menu.collections(collections);
        menu.run()?;
    }
    Ok(())
}

/// Seeds the sample catalog, saves it, and shows which operations the
/// rules accept and refuse. Refusals are printed, not returned.
pub fn script(
    library: &mut Library,
    store: &mut dyn RecordStore,
    collections: &Collections,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for (title, author) in SAMPLE_BOOKS {
        library.add_book(title, author)?;
    }
    for (user_id, name) in SAMPLE_USERS {
        library.register_user(user_id, name)?;
    }

    // Titles match exactly, so this one is refused.
    report(out, library.checkout_book(1, "Python for beginners"), |()| {
        "User 1 checked out 'Python for beginners'".to_string()
    })?;

    library.save_to_collections(store, collections)?;
    writeln!(out, "Library data saved.")?;

    writeln!(out, "Testing field validation:")?;
    writeln!(out, "Creating valid book and user objects:")?;
    let created = Book::new("Python Programming", "John Doe")
        .and_then(|book| User::new(1, "Alice").map(|user| (book, user)));
    report(out, created, |(book, user)| {
        format!(
            "Book created: {} by {}\nUser created: ID {}, Name {}",
            book.title(),
            book.author(),
            user.user_id(),
            user.name()
        )
    })?;

    writeln!(out, "Creating invalid book object:")?;
    report(out, Book::new("", "John Doe"), |book| {
        format!("Book created: {book}")
    })?;

    writeln!(out, "Creating invalid user object:")?;
    report(out, User::new(-5, "Bob"), |user| format!("User created: {user}"))?;

    report(out, library.checkout_book(3, "Python for Beginners"), |()| {
        "User 3 checked out 'Python for Beginners'".to_string()
    })?;

    report(out, library.checkout_book(1, "Advanced Python"), |()| {
        "User 1 checked out 'Advanced Python'".to_string()
    })?;
    report(out, library.checkout_book(2, "Advanced Python"), |()| {
        "User 2 checked out 'Advanced Python'".to_string()
    })?;

    Ok(())
}

fn report<T>(
    out: &mut dyn Write,
    result: LibraryResult<T>,
    describe: impl FnOnce(T) -> String,
) -> io::Result<()> {
    match result {
        Ok(value) => writeln!(out, "{}", describe(value)),
        Err(e) => writeln!(out, "{}", red(&format!("Error: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libris_storage::InMemoryStore;

    fn run_script(library: &mut Library, store: &mut InMemoryStore) -> String {
        let mut out = Vec::new();
        script(library, store, &Collections::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn script_seeds_and_saves() {
        let mut library = Library::new();
        let mut store = InMemoryStore::new();

        run_script(&mut library, &mut store);

        assert_eq!(library.book_count(), 5);
        assert_eq!(library.user_count(), 3);
        assert_eq!(store.load_records("books").unwrap().len(), 5);
        assert_eq!(store.load_records("users").unwrap().len(), 3);
    }

    #[test]
    fn script_reports_refusals_in_red() {
        let mut library = Library::new();
        let mut store = InMemoryStore::new();

        let out = run_script(&mut library, &mut store);

        assert!(out.contains(&red(
            "Error: the book 'Python for beginners' is not available"
        )));
        assert!(out.contains("Book created: Python Programming by John Doe"));
        assert!(out.contains(&red("Error: invalid title: must be a non-empty string")));
        assert!(out.contains(&red("Error: invalid user ID: must be a positive integer")));
        assert!(out.contains("User 3 checked out 'Python for Beginners'"));
        assert!(out.contains("User 1 checked out 'Advanced Python'"));
        assert!(out.contains(&red(
            "Error: book Advanced Python by John Doe is already checked out"
        )));
    }

    #[test]
    fn script_leaves_expected_checkouts() {
        let mut library = Library::new();
        let mut store = InMemoryStore::new();

        run_script(&mut library, &mut store);

        let titles = |user_id| -> Vec<String> {
            library
                .borrowed_books(user_id)
                .unwrap()
                .iter()
                .map(|b| b.title().to_string())
                .collect()
        };
        assert_eq!(titles(1), ["Advanced Python"]);
        assert!(titles(2).is_empty());
        assert_eq!(titles(3), ["Python for Beginners"]);
    }

    #[test]
    fn script_saves_under_given_collections() {
        let mut store = InMemoryStore::new();
        let collections = Collections {
            books: "shelf".to_string(),
            users: "readers".to_string(),
        };
        let mut out = Vec::new();

        script(&mut Library::new(), &mut store, &collections, &mut out).unwrap();

        assert_eq!(store.load_records("shelf").unwrap().len(), 5);
        assert_eq!(store.load_records("readers").unwrap().len(), 3);
        assert!(!store.contains("books"));
    }

    #[test]
    fn rerun_appends_duplicates() {
        let mut store = InMemoryStore::new();
        run_script(&mut Library::new(), &mut store);

        let mut library = Library::open(&store).unwrap();
        run_script(&mut library, &mut store);

        assert_eq!(library.book_count(), 10);
        assert_eq!(library.user_count(), 6);
    }
}
