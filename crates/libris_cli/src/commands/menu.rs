//! Interactive menu.

use crate::commands::open_library;
use libris_core::{Collections, Library, LibraryConfig, LibraryError};
use libris_storage::RecordStore;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::info;

/// Failure of a single menu step.
#[derive(Debug, Error)]
pub enum MenuError {
    /// A catalog operation was refused; the loop keeps going.
    #[error("Error: {0}")]
    Library(#[from] LibraryError),

    /// A number was expected and something else was typed.
    #[error("Invalid input. Please enter correct values.")]
    InvalidInput,

    /// Input ended.
    #[error("input closed")]
    Closed,

    /// Reading input or writing output failed.
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    AddBook,
    AddUser,
    ListBooks,
    ListUsers,
    Checkout,
    Return,
    UpdateAuthor,
    UpdateName,
    RemoveBook,
    RemoveUser,
    Save,
    Exit,
}

impl Choice {
    const ALL: [(&'static str, Choice, &'static str); 12] = [
        ("1", Choice::AddBook, "Add book"),
        ("2", Choice::AddUser, "Add user"),
        ("3", Choice::ListBooks, "List books"),
        ("4", Choice::ListUsers, "List users"),
        ("5", Choice::Checkout, "Check out book"),
        ("6", Choice::Return, "Return book"),
        ("7", Choice::UpdateAuthor, "Update book author"),
        ("8", Choice::UpdateName, "Update user name"),
        ("9", Choice::RemoveBook, "Remove book"),
        ("10", Choice::RemoveUser, "Remove user"),
        ("11", Choice::Save, "Save"),
        ("0", Choice::Exit, "Exit"),
    ];

    fn parse(input: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(key, _, _)| *key == input)
            .map(|(_, choice, _)| *choice)
    }
}

/// Runs the menu on stdin/stdout against the catalog in `config`.
pub fn run(config: &LibraryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (mut library, mut store) = open_library(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut menu = Menu::new(&mut library, &mut store, stdin.lock(), stdout.lock());
    menu.save_on_exit(config.save_on_exit);
    menu.collections(config.collections());
    menu.run()?;
    Ok(())
}

/// A menu session over arbitrary input and output.
pub struct Menu<'a, R, W> {
    library: &'a mut Library,
    store: &'a mut dyn RecordStore,
    input: R,
    output: W,
    save_on_exit: bool,
    collections: Collections,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Creates a session that saves to `store` when it ends.
    pub fn new(
        library: &'a mut Library,
        store: &'a mut dyn RecordStore,
        input: R,
        output: W,
    ) -> Self {
        Self {
            library,
            store,
            input,
            output,
            save_on_exit: true,
            collections: Collections::default(),
        }
    }

    /// Sets whether the catalog is saved when the session ends.
    pub fn save_on_exit(&mut self, value: bool) {
        self.save_on_exit = value;
    }

    /// Sets the collection names the catalog is saved under.
    pub fn collections(&mut self, collections: Collections) {
        self.collections = collections;
    }

    /// Reads choices until `Exit` or end of input.
    ///
    /// Refused operations and malformed numbers are reported and the loop
    /// continues. Only console I/O failures and a failed final save end
    /// the session with an error.
    pub fn run(&mut self) -> Result<(), MenuError> {
        writeln!(self.output, "The library system is ready for further operations.")?;

        loop {
            self.print_menu()?;
            let line = match self.prompt("Enter your choice: ") {
                Ok(line) => line,
                Err(MenuError::Closed) => break,
                Err(e) => return Err(e),
            };

            let Some(choice) = Choice::parse(line.trim()) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };
            if choice == Choice::Exit {
                writeln!(self.output, "Exiting...")?;
                break;
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(e @ (MenuError::Library(_) | MenuError::InvalidInput)) => {
                    writeln!(self.output, "{e}")?;
                }
                Err(MenuError::Closed) => break,
                Err(e @ MenuError::Io(_)) => return Err(e),
            }
        }

        if self.save_on_exit {
            self.library
                .save_to_collections(self.store, &self.collections)?;
            writeln!(self.output, "Library saved.")?;
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), MenuError> {
        writeln!(self.output, "Menu:")?;
        for (key, _, label) in Choice::ALL {
            writeln!(self.output, "{key}. {label}")?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> Result<(), MenuError> {
        match choice {
            Choice::AddBook => {
                let title = self.prompt("Enter book title: ")?;
                let author = self.prompt("Enter book author: ")?;
                self.library.add_book(title.as_str(), author)?;
                writeln!(self.output, "Book '{title}' added successfully.")?;
            }
            Choice::AddUser => {
                let user_id = self.prompt_number("Enter user ID: ")?;
                let name = self.prompt("Enter user name: ")?;
                self.library.register_user(user_id, name)?;
                writeln!(self.output, "User with ID {user_id} added successfully.")?;
            }
            Choice::ListBooks => {
                writeln!(self.output, "\nBooks in library:")?;
                for book in self.library.books() {
                    let status = if book.is_checked_out() {
                        " (checked out)"
                    } else {
                        ""
                    };
                    writeln!(self.output, "{book}{status}")?;
                }
            }
            Choice::ListUsers => {
                writeln!(self.output, "\nUsers in library:")?;
                for user in self.library.users() {
                    writeln!(self.output, "{user}")?;
                }
            }
            Choice::Checkout => {
                let user_id = self.prompt_number("Enter user ID: ")?;
                let title = self.prompt("Enter book title: ")?;
                self.library.checkout_book(user_id, &title)?;
                writeln!(self.output, "Book '{title}' checked out to user {user_id}.")?;
            }
            Choice::Return => {
                let user_id = self.prompt_number("Enter user ID: ")?;
                let title = self.prompt("Enter book title: ")?;
                self.library.return_book(user_id, &title)?;
                writeln!(self.output, "Book '{title}' returned by user {user_id}.")?;
            }
            Choice::UpdateAuthor => {
                let title = self.prompt("Enter book title: ")?;
                let author = self.prompt("Enter new author: ")?;
                self.library.update_book_author(&title, author.as_str())?;
                writeln!(self.output, "Updated book: {title}, new author: {author}")?;
            }
            Choice::UpdateName => {
                let user_id = self.prompt_number("Enter user ID: ")?;
                let name = self.prompt("Enter new name: ")?;
                self.library.update_user_name(user_id, name.as_str())?;
                writeln!(self.output, "Updated user ID {user_id}, new name: {name}")?;
            }
            Choice::RemoveBook => {
                let title = self.prompt("Enter book title: ")?;
                self.library.remove_book(&title)?;
                writeln!(self.output, "Removed book: {title}")?;
            }
            Choice::RemoveUser => {
                let user_id = self.prompt_number("Enter user ID: ")?;
                self.library.remove_user(user_id)?;
                writeln!(self.output, "Removed user ID {user_id}")?;
            }
            Choice::Save => {
                self.library
                    .save_to_collections(self.store, &self.collections)?;
                info!("Library saved from menu");
                writeln!(self.output, "Library saved.")?;
            }
            Choice::Exit => {}
        }
        Ok(())
    }

    /// Prints `label` and reads one line without its line terminator.
    fn prompt(&mut self, label: &str) -> Result<String, MenuError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::Closed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn prompt_number(&mut self, label: &str) -> Result<i64, MenuError> {
        self.prompt(label)?
            .trim()
            .parse()
            .map_err(|_| MenuError::InvalidInput)
    }
}
