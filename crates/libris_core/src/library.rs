//! Catalog ownership and cross-entity coordination.

use crate::config::Collections;
use crate::entity::{Book, BookId, User, BORROW_LIMIT};
use crate::error::{LibraryError, LibraryResult};
use crate::record::RecordCodec;
use libris_storage::RecordStore;
use tracing::{debug, info, warn};

/// The library catalog.
///
/// `Library` owns every [`Book`] and [`User`] and is the only place where
/// a user and a book are mutated together. It provides:
/// - Adding, updating and removing books and users
/// - Checkout and return between a user and a book
/// - Saving to and loading from a [`RecordStore`]
///
/// # Lookup rules
///
/// Books are looked up by exact title, users by ID. Neither key is
/// unique: adding a second book with an existing title is allowed, and
/// every lookup picks the **first** match in insertion order.
///
/// # Example
///
/// ```rust
/// use libris_core::Library;
///
/// let mut library = Library::new();
/// library.add_book("Dune", "Frank Herbert").unwrap();
/// library.register_user(1, "Maksym").unwrap();
///
/// library.checkout_book(1, "Dune").unwrap();
/// assert!(library.find_book("Dune").unwrap().is_checked_out());
///
/// library.return_book(1, "Dune").unwrap();
/// assert!(!library.find_book("Dune").unwrap().is_checked_out());
/// ```
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
    users: Vec<User>,
}

impl Library {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from the records in `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or a record cannot be decoded.
    pub fn open(store: &dyn RecordStore) -> LibraryResult<Self> {
        let mut library = Self::new();
        library.load_from(store)?;
        Ok(library)
    }

    /// Adds a book. Titles are not required to be unique.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidField`] if the title or author is
    /// rejected.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> LibraryResult<BookId> {
        let book = Book::new(title, author)?;
        let id = book.id();
        debug!(title = book.title(), author = book.author(), "book added");
        self.books.push(book);
        Ok(id)
    }

    /// Registers a user. IDs are not required to be unique.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidField`] if `user_id` is not positive.
    pub fn register_user(&mut self, user_id: i64, name: impl Into<String>) -> LibraryResult<()> {
        let user = User::new(user_id, name)?;
        debug!(user_id, name = user.name(), "user registered");
        self.users.push(user);
        Ok(())
    }

    /// Changes the author of the first book titled `title`.
    ///
    /// # Errors
    ///
    /// - [`LibraryError::BookNotFound`] if no book has that title
    /// - [`LibraryError::InvalidField`] if the new author is rejected
    pub fn update_book_author(
        &mut self,
        title: &str,
        new_author: impl Into<String>,
    ) -> LibraryResult<()> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.title() == title)
            .ok_or_else(|| LibraryError::BookNotFound {
                title: title.to_string(),
            })?;
        book.set_author(new_author)?;
        debug!(title, author = book.author(), "book author updated");
        Ok(())
    }

    /// Changes the name of the first user with `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::UserNotFound`] if no user has that ID.
    pub fn update_user_name(
        &mut self,
        user_id: i64,
        new_name: impl Into<String>,
    ) -> LibraryResult<()> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.user_id().get() == user_id)
            .ok_or(LibraryError::UserNotFound { user_id })?;
        user.set_name(new_name);
        debug!(user_id, name = user.name(), "user name updated");
        Ok(())
    }

    /// Removes the first book titled `title` and returns it.
    ///
    /// A checked-out book is returned first: it is dropped from its
    /// holder's borrowed list and comes back `Available`.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::BookNotAvailable`] if no book has that title.
    pub fn remove_book(&mut self, title: &str) -> LibraryResult<Book> {
        let index = self
            .book_index(title)
            .ok_or_else(|| LibraryError::BookNotAvailable {
                title: title.to_string(),
            })?;

        let mut book = self.books.remove(index);
        if book.is_checked_out() {
            let id = book.id();
            if let Some(holder) = self.users.iter_mut().find(|u| u.has_borrowed(id)) {
                holder.forget(id);
                warn!(
                    title,
                    user_id = %holder.user_id(),
                    "removed book was still borrowed; returned it"
                );
            }
            book.return_book()?;
        }
        debug!(title, "book removed");
        Ok(book)
    }

    /// Removes the first user with `user_id` and returns it.
    ///
    /// Every book the user holds is returned first, so the removed user
    /// comes back with an empty borrowed list.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::UserNotRegistered`] if no user has that ID.
    pub fn remove_user(&mut self, user_id: i64) -> LibraryResult<User> {
        let index = self
            .user_index(user_id)
            .ok_or(LibraryError::UserNotRegistered { user_id })?;

        let mut user = self.users.remove(index);
        let held = user.take_borrowed();
        if !held.is_empty() {
            warn!(
                user_id,
                count = held.len(),
                "removed user still held books; returned them"
            );
        }
        for id in held {
            if let Some(book) = self.books.iter_mut().find(|b| b.id() == id) {
                if book.is_checked_out() {
                    book.return_book()?;
                }
            }
        }
        debug!(user_id, "user removed");
        Ok(user)
    }

    /// Checks out the first book titled `title` to the first user with
    /// `user_id`.
    ///
    /// # Errors
    ///
    /// Checked in this order, nothing is changed on failure:
    /// - [`LibraryError::UserNotRegistered`] if no user has that ID
    /// - [`LibraryError::BookNotAvailable`] if no book has that title
    /// - [`LibraryError::BorrowLimitReached`] if the user holds
    ///   [`BORROW_LIMIT`] books already
    /// - [`LibraryError::AlreadyCheckedOut`] if the book is lent out
    pub fn checkout_book(&mut self, user_id: i64, title: &str) -> LibraryResult<()> {
        let user_index = self.user_index(user_id);
        let book_index = self.book_index(title);

        let user_index = user_index.ok_or(LibraryError::UserNotRegistered { user_id })?;
        let book_index = book_index.ok_or_else(|| LibraryError::BookNotAvailable {
            title: title.to_string(),
        })?;

        let user = &mut self.users[user_index];
        // Same cap as User::borrow_book, checked before either entity is touched.
        if user.borrowed_count() >= BORROW_LIMIT {
            return Err(user.limit_error());
        }

        user.borrow_book(&mut self.books[book_index])?;
        info!(user_id, title, "checkout completed");
        Ok(())
    }

    /// Returns a book titled `title` held by the user with `user_id`.
    ///
    /// If the user holds several books with that title, the one borrowed
    /// first is returned.
    ///
    /// # Errors
    ///
    /// - [`LibraryError::UserNotRegistered`] if no user has that ID
    /// - [`LibraryError::BookNotAvailable`] if no book has that title
    /// - [`LibraryError::NotBorrowed`] if the user holds no such book
    pub fn return_book(&mut self, user_id: i64, title: &str) -> LibraryResult<()> {
        let user_index = self
            .user_index(user_id)
            .ok_or(LibraryError::UserNotRegistered { user_id })?;

        let user = &mut self.users[user_index];
        let held = user.borrowed_books().iter().find_map(|id| {
            self.books
                .iter()
                .position(|b| b.id() == *id && b.title() == title)
        });
        let book_index = held
            .or_else(|| self.books.iter().position(|b| b.title() == title))
            .ok_or_else(|| LibraryError::BookNotAvailable {
                title: title.to_string(),
            })?;

        user.return_book(&mut self.books[book_index])?;
        info!(user_id, title, "return completed");
        Ok(())
    }

    /// Returns every book, in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns every user, in registration order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the number of books.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Returns the number of users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Finds the first book titled `title`.
    #[must_use]
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title() == title)
    }

    /// Finds the first user with `user_id`.
    #[must_use]
    pub fn find_user(&self, user_id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.user_id().get() == user_id)
    }

    /// Finds the user currently holding the book with `id`.
    #[must_use]
    pub fn holder_of(&self, id: BookId) -> Option<&User> {
        self.users.iter().find(|u| u.has_borrowed(id))
    }

    /// Returns the books held by the user with `user_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::UserNotRegistered`] if no user has that ID.
    pub fn borrowed_books(&self, user_id: i64) -> LibraryResult<Vec<&Book>> {
        let user = self
            .find_user(user_id)
            .ok_or(LibraryError::UserNotRegistered { user_id })?;
        Ok(user
            .borrowed_books()
            .iter()
            .filter_map(|id| self.books.iter().find(|b| b.id() == *id))
            .collect())
    }

    /// Writes books, then users, to `store`.
    ///
    /// Checkout state and borrowed lists are not saved. The two
    /// collections are written independently.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails. If the books were written
    /// before the failure they stay written.
    pub fn save_to(&self, store: &mut dyn RecordStore) -> LibraryResult<()> {
        self.save_to_collections(store, &Collections::default())
    }

    /// Writes books, then users, under the names in `collections`.
    ///
    /// # Errors
    ///
    /// Same as [`Library::save_to`].
    pub fn save_to_collections(
        &self,
        store: &mut dyn RecordStore,
        collections: &Collections,
    ) -> LibraryResult<()> {
        store.save_records(&collections.books, &Book::to_records(&self.books))?;
        store.save_records(&collections.users, &User::to_records(&self.users))?;
        info!(
            books = self.books.len(),
            users = self.users.len(),
            "library saved"
        );
        Ok(())
    }

    /// Replaces the catalog with the contents of `store`.
    ///
    /// Every loaded book is `Available` and every loaded user holds
    /// nothing. On error the current catalog is left as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or a record cannot be decoded.
    pub fn load_from(&mut self, store: &dyn RecordStore) -> LibraryResult<()> {
        self.load_from_collections(store, &Collections::default())
    }

    /// Replaces the catalog with the collections named in `collections`.
    ///
    /// # Errors
    ///
    /// Same as [`Library::load_from`].
    pub fn load_from_collections(
        &mut self,
        store: &dyn RecordStore,
        collections: &Collections,
    ) -> LibraryResult<()> {
        let books = Book::from_records(&store.load_records(&collections.books)?)?;
        let users = User::from_records(&store.load_records(&collections.users)?)?;
        info!(books = books.len(), users = users.len(), "library loaded");
        self.books = books;
        self.users = users;
        Ok(())
    }

    fn book_index(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|b| b.title() == title)
    }

    fn user_index(&self, user_id: i64) -> Option<usize> {
        self.users.iter().position(|u| u.user_id().get() == user_id)
    }
}
