//! # Libris Testkit
//!
//! Test utilities for Libris.
//!
//! This crate provides:
//! - Test fixtures: catalogs backed by a temporary JSON store
//! - Property-based test generators using proptest
//! - A lending harness that checks catalog invariants after every step
//!
//! ## Usage
//!
//! ```rust
//! use libris_testkit::prelude::*;
//!
//! let mut fixture = TestLibrary::file();
//! fixture.add_book("Dune", "Frank Herbert").unwrap();
//! fixture.save();
//! assert_eq!(fixture.reload().book_count(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod integration;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::integration::*;
}

pub use fixtures::*;
pub use generators::*;
pub use integration::*;
