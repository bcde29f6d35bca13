//! Lending harness and catalog invariant checks.
//!
//! Provides utilities for driving a [`Library`] through operation
//! sequences and verifying that books and users stay consistent after
//! every step.

use crate::generators::LendingOperation;
use libris_core::{BookId, BookState, Library, LibraryResult, BORROW_LIMIT};
use std::collections::HashMap;

/// A comparable view of a catalog's observable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// `(id, title, author, state)` per book, in catalog order.
    pub books: Vec<(BookId, String, String, BookState)>,
    /// `(user_id, name, borrowed)` per user, in catalog order.
    pub users: Vec<(i64, String, Vec<BookId>)>,
}

impl Snapshot {
    /// Captures the current state of `library`.
    pub fn of(library: &Library) -> Self {
        Self {
            books: library
                .books()
                .iter()
                .map(|b| (b.id(), b.title().to_string(), b.author().to_string(), b.state()))
                .collect(),
            users: library
                .users()
                .iter()
                .map(|u| {
                    (
                        u.user_id().get(),
                        u.name().to_string(),
                        u.borrowed_books().to_vec(),
                    )
                })
                .collect(),
        }
    }
}

/// Asserts the catalog invariants:
/// - no user holds more than [`BORROW_LIMIT`] books
/// - every held ID refers to a book in the catalog
/// - a book is checked out exactly when one user holds it
///
/// # Panics
///
/// Panics with a description of the first violation found.
pub fn check_invariants(library: &Library) {
    let mut holders: HashMap<BookId, usize> = HashMap::new();
    for user in library.users() {
        assert!(
            user.borrowed_count() <= BORROW_LIMIT,
            "user {} holds {} books",
            user.user_id(),
            user.borrowed_count()
        );
        for id in user.borrowed_books() {
            *holders.entry(*id).or_default() += 1;
        }
    }

    for id in holders.keys() {
        assert!(
            library.books().iter().any(|b| b.id() == *id),
            "borrowed list refers to missing book {id}"
        );
    }

    for book in library.books() {
        let held = holders.get(&book.id()).copied().unwrap_or(0);
        if book.is_checked_out() {
            assert_eq!(held, 1, "checked-out book {book} has {held} holders");
        } else {
            assert_eq!(held, 0, "available book {book} has {held} holders");
        }
    }
}

/// A test harness that applies lending operations and checks the catalog
/// after each one.
pub struct LendingHarness {
    /// The catalog under test.
    pub library: Library,
    succeeded: usize,
    failed: usize,
}

impl LendingHarness {
    /// Creates a harness over an empty catalog.
    pub fn new() -> Self {
        Self::with_library(Library::new())
    }

    /// Creates a harness over an existing catalog.
    pub fn with_library(library: Library) -> Self {
        Self {
            library,
            succeeded: 0,
            failed: 0,
        }
    }

    /// Applies `op`, then verifies the invariants.
    ///
    /// A failed operation must leave the catalog exactly as it was.
    pub fn apply(&mut self, op: &LendingOperation) -> LibraryResult<()> {
        let before = Snapshot::of(&self.library);
        let result = run(&mut self.library, op);
        match &result {
            Ok(()) => self.succeeded += 1,
            Err(err) => {
                self.failed += 1;
                assert_eq!(
                    before,
                    Snapshot::of(&self.library),
                    "failed operation {op:?} ({err}) changed the catalog"
                );
            }
        }
        check_invariants(&self.library);
        result
    }

    /// Applies every operation in `ops`, ignoring individual failures.
    pub fn apply_all(&mut self, ops: &[LendingOperation]) {
        for op in ops {
            let _ = self.apply(op);
        }
    }

    /// Returns the number of operations that succeeded.
    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    /// Returns the number of operations that failed.
    pub fn failed(&self) -> usize {
        self.failed
    }
}

impl Default for LendingHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn run(library: &mut Library, op: &LendingOperation) -> LibraryResult<()> {
    match op {
        LendingOperation::AddBook { title, author } => {
            library.add_book(title.as_str(), author.as_str()).map(drop)
        }
        LendingOperation::RegisterUser { user_id, name } => {
            library.register_user(*user_id, name.as_str())
        }
        LendingOperation::Checkout { user_id, title } => library.checkout_book(*user_id, title),
        LendingOperation::Return { user_id, title } => library.return_book(*user_id, title),
        LendingOperation::UpdateAuthor { title, author } => {
            library.update_book_author(title, author.as_str())
        }
        LendingOperation::RemoveBook { title } => library.remove_book(title).map(drop),
        LendingOperation::RemoveUser { user_id } => library.remove_user(*user_id).map(drop),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libris_core::ErrorKind;

    fn checkout(user_id: i64, title: &str) -> LendingOperation {
        LendingOperation::Checkout {
            user_id,
            title: title.to_string(),
        }
    }

    #[test]
    fn harness_counts_outcomes() {
        let mut harness = LendingHarness::with_library(crate::scenarios::populated_library(2, 1));
        harness.apply(&checkout(1, "Book 0")).unwrap();
        let err = harness.apply(&checkout(1, "Book 0")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BookUnavailable);
        assert_eq!(harness.succeeded(), 1);
        assert_eq!(harness.failed(), 1);
    }

    #[test]
    fn snapshot_tracks_state() {
        let mut library = crate::scenarios::populated_library(1, 1);
        let before = Snapshot::of(&library);
        library.checkout_book(1, "Book 0").unwrap();
        assert_ne!(before, Snapshot::of(&library));
    }

    #[test]
    fn invariants_hold_for_full_user() {
        check_invariants(&crate::scenarios::library_with_full_user());
    }
}
