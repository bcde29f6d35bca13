//! Entity identifiers.

use std::fmt;
use uuid::Uuid;

/// Process-local identity of a book.
///
/// Book IDs are random 128-bit UUIDs that are:
/// - Unique among all books created by this process
/// - Immutable once assigned
/// - Never persisted (a reloaded book gets a fresh ID)
///
/// Titles are the lookup key, but titles may repeat; the ID is what a
/// user's borrowed list holds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(Uuid);

impl BookId {
    /// Creates a new random book ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookId({})", self.0)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated user identifier.
///
/// Always a positive integer. Build one with
/// [`validate_user_id`](crate::validate_user_id) or
/// [`parse_user_id`](crate::parse_user_id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub(crate) i64);

impl UserId {
    /// Returns the raw integer.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = crate::error::LibraryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        crate::validate::validate_user_id(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_id_new_is_unique() {
        let id1 = BookId::new();
        let id2 = BookId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn book_id_display() {
        let id = BookId::new();
        assert_eq!(id.to_string(), id.to_uuid().to_string());
    }

    #[test]
    fn user_id_try_from() {
        assert_eq!(UserId::try_from(3).unwrap().get(), 3);
        assert!(UserId::try_from(0).is_err());
    }

    #[test]
    fn user_id_ordering() {
        assert!(UserId(1) < UserId(2));
        assert_eq!(i64::from(UserId(9)), 9);
    }
}
