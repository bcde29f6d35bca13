//! Error types for Libris core.

use libris_storage::StorageError;
use thiserror::Error;

/// Result type for core operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Broad category of a [`LibraryError`].
///
/// Callers that only care about the family of a failure (for example a
/// console loop deciding what to print) match on this instead of on the
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field value was rejected at construction or mutation.
    Validation,
    /// A book is checked out already, or no book has the requested title.
    BookUnavailable,
    /// No user has the requested ID.
    UserNotRegistered,
    /// Any other rule of the lending workflow was broken.
    Library,
    /// Persisted data could not be written, read or decoded.
    Storage,
}

/// Errors that can occur in Libris core operations.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// A title, author or user ID failed validation.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// The field that was rejected.
        field: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Checkout attempted on a book that is already checked out.
    #[error("book {title} by {author} is already checked out")]
    AlreadyCheckedOut {
        /// Title of the book.
        title: String,
        /// Author of the book.
        author: String,
    },

    /// No book with this title exists for checkout or removal.
    #[error("the book '{title}' is not available")]
    BookNotAvailable {
        /// The requested title.
        title: String,
    },

    /// No user with this ID is registered.
    #[error("user with ID {user_id} is not registered")]
    UserNotRegistered {
        /// The requested user ID.
        user_id: i64,
    },

    /// No book with this title exists for an update.
    #[error("book with title '{title}' was not found")]
    BookNotFound {
        /// The requested title.
        title: String,
    },

    /// No user with this ID exists for an update.
    #[error("user with ID {user_id} was not found")]
    UserNotFound {
        /// The requested user ID.
        user_id: i64,
    },

    /// The user already holds the maximum number of books.
    #[error("user {name} has reached the limit of {limit} borrowed books")]
    BorrowLimitReached {
        /// Display name of the user.
        name: String,
        /// The borrow cap.
        limit: usize,
    },

    /// Return attempted on a book that is not checked out.
    #[error("book '{title}' is not checked out")]
    NotCheckedOut {
        /// Title of the book.
        title: String,
    },

    /// Return attempted for a book the user does not hold.
    #[error("book '{title}' not found in borrowed list of user {user_id}")]
    NotBorrowed {
        /// Title of the book.
        title: String,
        /// The user that was asked to return it.
        user_id: i64,
    },

    /// A persisted record is missing a field or has the wrong shape.
    #[error("invalid {collection} record: {message}")]
    InvalidRecord {
        /// The collection the record came from.
        collection: &'static str,
        /// Description of the problem.
        message: String,
    },

    /// The record store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl LibraryError {
    /// Returns the category this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidField { .. } => ErrorKind::Validation,
            Self::AlreadyCheckedOut { .. } | Self::BookNotAvailable { .. } => {
                ErrorKind::BookUnavailable
            }
            Self::UserNotRegistered { .. } => ErrorKind::UserNotRegistered,
            Self::BookNotFound { .. }
            | Self::UserNotFound { .. }
            | Self::BorrowLimitReached { .. }
            | Self::NotCheckedOut { .. }
            | Self::NotBorrowed { .. } => ErrorKind::Library,
            Self::InvalidRecord { .. } | Self::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Creates a field validation error.
    pub fn invalid_field(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidField { field, reason }
    }

    /// Creates an invalid record error.
    pub fn invalid_record(collection: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            collection,
            message: message.into(),
        }
    }
}
