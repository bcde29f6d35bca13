//! Book and user listings.

use crate::commands::open_library;
use libris_core::{Book, Library, LibraryConfig, User};
use serde::Serialize;
use std::io::{self, Write};

/// A book as shown in listings.
#[derive(Debug, Serialize)]
pub struct BookRow<'a> {
    /// Book title.
    pub title: &'a str,
    /// Book author.
    pub author: &'a str,
    /// Whether the book is lent out.
    pub checked_out: bool,
}

impl<'a> From<&'a Book> for BookRow<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            title: book.title(),
            author: book.author(),
            checked_out: book.is_checked_out(),
        }
    }
}

/// A user as shown in listings.
#[derive(Debug, Serialize)]
pub struct UserRow<'a> {
    /// User ID.
    pub user_id: i64,
    /// Display name.
    pub name: &'a str,
    /// Number of books held.
    pub borrowed: usize,
}

impl<'a> From<&'a User> for UserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            user_id: user.user_id().get(),
            name: user.name(),
            borrowed: user.borrowed_count(),
        }
    }
}

/// Runs the `books` command.
pub fn books(config: &LibraryConfig, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (library, _) = open_library(config)?;
    write_books(&library, format, &mut io::stdout().lock())
}

/// Runs the `users` command.
pub fn users(config: &LibraryConfig, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (library, _) = open_library(config)?;
    write_users(&library, format, &mut io::stdout().lock())
}

/// Writes every book in `format` (`text` or `json`).
pub fn write_books(
    library: &Library,
    format: &str,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<BookRow<'_>> = library.books().iter().map(BookRow::from).collect();
    if format == "json" {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    write_header(out, "Books", rows.len())?;
    for row in &rows {
        let status = if row.checked_out { "●" } else { "○" };
        writeln!(out, "  {status} {} by {}", row.title, row.author)?;
    }
    Ok(())
}

/// Writes every user in `format` (`text` or `json`).
pub fn write_users(
    library: &Library,
    format: &str,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<UserRow<'_>> = library.users().iter().map(UserRow::from).collect();
    if format == "json" {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    write_header(out, "Users", rows.len())?;
    for row in &rows {
        writeln!(out, "  ID: {}, Name: {}", row.user_id, row.name)?;
    }
    Ok(())
}

fn write_header(out: &mut dyn Write, what: &str, count: usize) -> io::Result<()> {
    writeln!(out, "{what} ({count})")?;
    writeln!(out, "{}", "=".repeat(what.len() + count.to_string().len() + 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Library {
        let mut library = Library::new();
        library.add_book("Dune", "Frank Herbert").unwrap();
        library.add_book("Emma", "Jane Austen").unwrap();
        library.register_user(1, "Maksym").unwrap();
        library.checkout_book(1, "Emma").unwrap();
        library
    }

    fn render(f: impl Fn(&mut dyn Write)) -> String {
        let mut out = Vec::new();
        f(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn books_text() {
        let library = library();
        let out = render(|out| write_books(&library, "text", out).unwrap());

        assert!(out.starts_with("Books (2)\n=========\n"));
        assert!(out.contains("  ○ Dune by Frank Herbert"));
        assert!(out.contains("  ● Emma by Jane Austen"));
    }

    #[test]
    fn books_json() {
        let library = library();
        let out = render(|out| write_books(&library, "json", out).unwrap());

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["title"], "Dune");
        assert_eq!(value[1]["checked_out"], true);
    }

    #[test]
    fn users_text_and_json() {
        let library = library();

        let text = render(|out| write_users(&library, "text", out).unwrap());
        assert!(text.contains("  ID: 1, Name: Maksym"));

        let json = render(|out| write_users(&library, "json", out).unwrap());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["user_id"], 1);
        assert_eq!(value[0]["borrowed"], 1);
    }
}
