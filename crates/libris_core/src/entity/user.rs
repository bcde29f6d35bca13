//! User entity and per-user borrowing rules.

use crate::entity::{Book, BookId, UserId};
use crate::error::{LibraryError, LibraryResult};
use crate::record::{fields, Record, RecordCodec};
use crate::validate::validate_user_id;
use std::fmt;
use tracing::debug;

/// Maximum number of books a user may hold at once.
pub const BORROW_LIMIT: usize = 3;

/// A registered library user.
///
/// A user remembers which books it holds by [`BookId`], in borrow order.
/// The list never grows past [`BORROW_LIMIT`].
#[derive(Debug, Clone)]
pub struct User {
    user_id: UserId,
    name: String,
    borrowed: Vec<BookId>,
}

impl User {
    /// Creates a user holding no books.
    ///
    /// The name is free-form and not validated.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidField`] if `user_id` is not positive.
    pub fn new(user_id: i64, name: impl Into<String>) -> LibraryResult<Self> {
        Ok(Self {
            user_id: validate_user_id(user_id)?,
            name: name.into(),
            borrowed: Vec::new(),
        })
    }

    /// Returns the user ID.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the IDs of the books this user holds, oldest first.
    #[must_use]
    pub fn borrowed_books(&self) -> &[BookId] {
        &self.borrowed
    }

    /// Returns the number of books this user holds.
    #[must_use]
    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }

    /// Checks if this user holds the given book.
    #[must_use]
    pub fn has_borrowed(&self, id: BookId) -> bool {
        self.borrowed.contains(&id)
    }

    /// Checks if this user has reached [`BORROW_LIMIT`].
    #[must_use]
    pub fn at_borrow_limit(&self) -> bool {
        self.borrowed.len() >= BORROW_LIMIT
    }

    /// Checks out `book` and adds it to this user's list.
    ///
    /// The limit is checked before the book is touched.
    ///
    /// # Errors
    ///
    /// - [`LibraryError::BorrowLimitReached`] if the user holds
    ///   [`BORROW_LIMIT`] books already
    /// - Any error from [`Book::checkout`], unchanged; the book is not
    ///   added to the list
    pub fn borrow_book(&mut self, book: &mut Book) -> LibraryResult<()> {
        if self.at_borrow_limit() {
            return Err(self.limit_error());
        }
        book.checkout()?;
        self.borrowed.push(book.id());
        debug!(user_id = %self.user_id, title = book.title(), "book borrowed");
        Ok(())
    }

    /// Returns `book` and removes it from this user's list.
    ///
    /// # Errors
    ///
    /// - [`LibraryError::NotBorrowed`] if the user does not hold the book
    /// - Any error from [`Book::return_book`], unchanged; the book stays
    ///   in the list
    pub fn return_book(&mut self, book: &mut Book) -> LibraryResult<()> {
        let Some(position) = self.borrowed.iter().position(|id| *id == book.id()) else {
            return Err(LibraryError::NotBorrowed {
                title: book.title().to_string(),
                user_id: self.user_id.get(),
            });
        };
        book.return_book()?;
        self.borrowed.remove(position);
        debug!(user_id = %self.user_id, title = book.title(), "book given back");
        Ok(())
    }

    /// Drops `id` from the list without touching the book.
    ///
    /// Used when the book itself leaves the catalog.
    pub(crate) fn forget(&mut self, id: BookId) -> bool {
        let before = self.borrowed.len();
        self.borrowed.retain(|held| *held != id);
        self.borrowed.len() != before
    }

    /// Empties the list, returning what it held.
    pub(crate) fn take_borrowed(&mut self) -> Vec<BookId> {
        std::mem::take(&mut self.borrowed)
    }

    pub(crate) fn limit_error(&self) -> LibraryError {
        LibraryError::BorrowLimitReached {
            name: self.name.clone(),
            limit: BORROW_LIMIT,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}", self.user_id, self.name)
    }
}

impl RecordCodec for User {
    const COLLECTION: &'static str = "users";

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("user_id".into(), self.user_id.get().into());
        record.insert("name".into(), self.name.clone().into());
        record
    }

    /// Rebuilds a user with an empty borrowed list, trimming the name.
    fn from_record(record: &Record) -> LibraryResult<Self> {
        let user_id = fields::user_id(record, Self::COLLECTION, "user_id")?;
        let name = fields::text(record, Self::COLLECTION, "name")?.trim();
        Self::new(user_id, name)
    }
}
