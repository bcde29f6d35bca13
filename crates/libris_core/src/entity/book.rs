//! Book entity and its checkout state machine.

use crate::entity::BookId;
use crate::error::{LibraryError, LibraryResult};
use crate::record::{fields, Record, RecordCodec};
use crate::validate::{validate_author, validate_title};
use std::fmt;
use tracing::debug;

/// Availability of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookState {
    /// On the shelf, can be checked out.
    #[default]
    Available,
    /// Lent to a user.
    CheckedOut,
}

/// A catalogued book.
///
/// Title and author are validated on construction and on every change.
/// The checkout state only moves through [`Book::checkout`] and
/// [`Book::return_book`]:
///
/// ```text
///            checkout()
/// Available ───────────▶ CheckedOut
///     ▲                      │
///     └──────────────────────┘
///          return_book()
/// ```
#[derive(Debug, Clone)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    state: BookState,
}

impl Book {
    /// Creates an available book.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidField`] if the title or author is
    /// rejected by the validators.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> LibraryResult<Self> {
        Ok(Self {
            id: BookId::new(),
            title: validate_title(title)?,
            author: validate_author(author)?,
            state: BookState::Available,
        })
    }

    /// Returns the process-local identity of this book.
    #[must_use]
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the current availability.
    #[must_use]
    pub fn state(&self) -> BookState {
        self.state
    }

    /// Checks if the book is lent out.
    #[must_use]
    pub fn is_checked_out(&self) -> bool {
        self.state == BookState::CheckedOut
    }

    /// Replaces the title after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidField`] and keeps the old title if
    /// the new one is rejected.
    pub fn set_title(&mut self, title: impl Into<String>) -> LibraryResult<()> {
        self.title = validate_title(title)?;
        Ok(())
    }

    /// Replaces the author after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidField`] and keeps the old author if
    /// the new one is rejected.
    pub fn set_author(&mut self, author: impl Into<String>) -> LibraryResult<()> {
        self.author = validate_author(author)?;
        Ok(())
    }

    /// Marks the book as checked out.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::AlreadyCheckedOut`] if the book is lent
    /// out already. The state is left unchanged.
    pub fn checkout(&mut self) -> LibraryResult<()> {
        match self.state {
            BookState::Available => {
                self.state = BookState::CheckedOut;
                debug!(title = %self.title, "book checked out");
                Ok(())
            }
            BookState::CheckedOut => Err(LibraryError::AlreadyCheckedOut {
                title: self.title.clone(),
                author: self.author.clone(),
            }),
        }
    }

    /// Marks the book as available again.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::NotCheckedOut`] if the book is already
    /// available. The state is left unchanged.
    pub fn return_book(&mut self) -> LibraryResult<()> {
        match self.state {
            BookState::CheckedOut => {
                self.state = BookState::Available;
                debug!(title = %self.title, "book returned");
                Ok(())
            }
            BookState::Available => Err(LibraryError::NotCheckedOut {
                title: self.title.clone(),
            }),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

impl RecordCodec for Book {
    const COLLECTION: &'static str = "books";

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("title".into(), self.title.clone().into());
        record.insert("author".into(), self.author.clone().into());
        record
    }

    /// Rebuilds an available book, trimming title and author first.
    fn from_record(record: &Record) -> LibraryResult<Self> {
        let title = fields::text(record, Self::COLLECTION, "title")?.trim();
        let author = fields::text(record, Self::COLLECTION, "author")?.trim();
        Self::new(title, author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert").unwrap()
    }

    #[test]
    fn new_book_is_available() {
        let book = dune();
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.author(), "Frank Herbert");
        assert_eq!(book.state(), BookState::Available);
        assert!(!book.is_checked_out());
    }

    #[test]
    fn new_rejects_invalid_fields() {
        assert_eq!(
            Book::new("", "John Doe").unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            Book::new("Sci-Fi!", "John Doe").unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            Book::new("Dune", "").unwrap_err().kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn checkout_return_cycle() {
        let mut book = dune();

        book.checkout().unwrap();
        assert!(book.is_checked_out());

        let err = book.checkout().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BookUnavailable);
        assert!(err.to_string().contains("Dune by Frank Herbert"));
        assert!(book.is_checked_out());

        book.return_book().unwrap();
        assert!(!book.is_checked_out());

        let err = book.return_book().unwrap_err();
        assert!(matches!(err, LibraryError::NotCheckedOut { .. }));
        assert_eq!(err.kind(), ErrorKind::Library);
        assert!(!book.is_checked_out());

        book.checkout().unwrap();
        assert!(book.is_checked_out());
    }

    #[test]
    fn setters_revalidate() {
        let mut book = dune();

        book.set_author("F. Herbert").unwrap();
        assert_eq!(book.author(), "F. Herbert");

        assert!(book.set_author("").is_err());
        assert_eq!(book.author(), "F. Herbert");

        book.set_title("Dune Messiah").unwrap();
        assert_eq!(book.title(), "Dune Messiah");

        assert!(book.set_title("Dune: Messiah").is_err());
        assert_eq!(book.title(), "Dune Messiah");
    }

    #[test]
    fn setters_keep_checkout_state() {
        let mut book = dune();
        book.checkout().unwrap();
        book.set_author("Someone Else").unwrap();
        assert!(book.is_checked_out());
    }

    #[test]
    fn display_shows_title_and_author() {
        assert_eq!(dune().to_string(), "Dune by Frank Herbert");
    }

    #[test]
    fn record_has_title_and_author_only() {
        let mut book = dune();
        book.checkout().unwrap();

        let record = book.to_record();
        assert_eq!(record.len(), 2);
        assert_eq!(record["title"], "Dune");
        assert_eq!(record["author"], "Frank Herbert");
    }

    #[test]
    fn from_record_trims_and_starts_available() {
        let record = json!({"title": "  Dune ", "author": " Frank Herbert\n"});
        let book = Book::from_record(record.as_object().unwrap()).unwrap();

        assert_eq!(book.title(), "Dune");
        assert_eq!(book.author(), "Frank Herbert");
        assert!(!book.is_checked_out());
    }

    #[test]
    fn from_record_validates() {
        let record = json!({"title": "Dune!", "author": "Frank Herbert"});
        let err = Book::from_record(record.as_object().unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let record = json!({"title": "   ", "author": "Frank Herbert"});
        let err = Book::from_record(record.as_object().unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn from_record_requires_text_fields() {
        let record = json!({"title": "Dune"});
        let err = Book::from_record(record.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, LibraryError::InvalidRecord { collection: "books", .. }));

        let record = json!({"title": 12, "author": "Frank Herbert"});
        let err = Book::from_record(record.as_object().unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
