//! # Libris Core
//!
//! Catalog and lending rules for Libris.
//!
//! This crate provides:
//! - Field validators for titles, authors and user IDs
//! - [`Book`] with its checkout/return state machine
//! - [`User`] with the per-user borrow cap
//! - [`Library`], which owns both and coordinates checkouts
//! - [`RecordCodec`] for turning entities into plain records
//!
//! Nothing here prints. Every operation returns a [`LibraryResult`] and
//! emits `tracing` events; presenting results is up to the caller.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod entity;
mod error;
mod library;
mod record;
mod validate;

pub use config::{Collections, LibraryConfig};
pub use entity::{Book, BookId, BookState, User, UserId, BORROW_LIMIT};
pub use error::{ErrorKind, LibraryError, LibraryResult};
pub use library::Library;
pub use record::{Record, RecordCodec};
pub use validate::{parse_user_id, validate_author, validate_title, validate_user_id};

/// Crate version, for display in tools.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
