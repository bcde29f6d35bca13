//! Catalog entities.

mod book;
mod id;
mod user;

pub use book::{Book, BookState};
pub use id::{BookId, UserId};
pub use user::{User, BORROW_LIMIT};
