//! Property-based test generators using proptest.
//!
//! Provides strategies for generating catalog data and lending
//! operations. Valid strategies only produce values the validators
//! accept; the `invalid_*` strategies only produce values they reject.

use proptest::prelude::*;

/// Titles that operation sequences draw from, so that checkouts and
/// returns hit existing books often.
pub const TITLE_POOL: &[&str] = &[
    "Python for Beginners",
    "Advanced Python",
    "Data Science Handbook",
    "Machine Learning Basics",
    "Web Development with Django",
    "Missing Title",
];

/// Upper bound of the user IDs operation sequences draw from.
pub const MAX_POOL_USER_ID: i64 = 4;

/// Strategy for generating titles the validator accepts.
///
/// Words are separated by single spaces with no leading or trailing
/// whitespace, so titles survive a save and load unchanged.
pub fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_]{1,12}( [A-Za-z0-9_]{1,12}){0,3}")
        .expect("Invalid regex")
}

/// Strategy for generating titles the validator rejects.
pub fn invalid_title_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        4 => prop::string::string_regex("[A-Za-z ]{0,8}[!@#$%^&*.,:;?()/-][A-Za-z ]{0,8}")
            .expect("Invalid regex"),
    ]
}

/// Strategy for generating non-empty author names.
pub fn author_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{1,10}( [A-Z][a-z.']{1,10}){0,2}")
        .expect("Invalid regex")
}

/// Strategy for generating user names.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{1,12}").expect("Invalid regex")
}

/// Strategy for generating user IDs the validator accepts.
pub fn user_id_strategy() -> impl Strategy<Value = i64> {
    1..=i64::MAX
}

/// Strategy for generating user IDs the validator rejects.
pub fn invalid_user_id_strategy() -> impl Strategy<Value = i64> {
    i64::MIN..=0
}

/// Strategy for generating a catalog of `(title, author)` pairs.
pub fn catalog_strategy(max_books: usize) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((title_strategy(), author_strategy()), 0..=max_books)
}

/// A single step against a catalog.
#[derive(Debug, Clone)]
pub enum LendingOperation {
    /// Add a book
    AddBook {
        /// Book title
        title: String,
        /// Book author
        author: String,
    },
    /// Register a user
    RegisterUser {
        /// User ID (may be non-positive)
        user_id: i64,
        /// User name
        name: String,
    },
    /// Check out a book
    Checkout {
        /// User ID
        user_id: i64,
        /// Book title
        title: String,
    },
    /// Return a book
    Return {
        /// User ID
        user_id: i64,
        /// Book title
        title: String,
    },
    /// Change a book's author
    UpdateAuthor {
        /// Book title
        title: String,
        /// New author
        author: String,
    },
    /// Remove a book
    RemoveBook {
        /// Book title
        title: String,
    },
    /// Remove a user
    RemoveUser {
        /// User ID
        user_id: i64,
    },
}

fn pooled_title() -> impl Strategy<Value = String> {
    prop::sample::select(TITLE_POOL).prop_map(str::to_string)
}

fn pooled_user_id() -> impl Strategy<Value = i64> {
    prop_oneof![
        9 => 1..=MAX_POOL_USER_ID,
        1 => -1..=0i64,
    ]
}

/// Strategy for generating lending operations over a small pool of titles
/// and user IDs.
pub fn lending_operation_strategy() -> impl Strategy<Value = LendingOperation> {
    prop_oneof![
        3 => (pooled_title(), author_strategy())
            .prop_map(|(title, author)| LendingOperation::AddBook { title, author }),
        2 => (pooled_user_id(), name_strategy())
            .prop_map(|(user_id, name)| LendingOperation::RegisterUser { user_id, name }),
        5 => (pooled_user_id(), pooled_title())
            .prop_map(|(user_id, title)| LendingOperation::Checkout { user_id, title }),
        3 => (pooled_user_id(), pooled_title())
            .prop_map(|(user_id, title)| LendingOperation::Return { user_id, title }),
        1 => (pooled_title(), author_strategy())
            .prop_map(|(title, author)| LendingOperation::UpdateAuthor { title, author }),
        1 => pooled_title().prop_map(|title| LendingOperation::RemoveBook { title }),
        1 => pooled_user_id().prop_map(|user_id| LendingOperation::RemoveUser { user_id }),
    ]
}

/// Strategy for generating a sequence of lending operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<LendingOperation>> {
    prop::collection::vec(lending_operation_strategy(), min_ops..max_ops)
}

/// Case count, shrink budget and sequence length for lending property
/// runs.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
    /// Longest operation sequence a case may apply.
    pub max_ops: usize,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
            max_ops: 80,
        }
    }
}

impl PropTestConfig {
    /// Few short sequences, for runs that also touch the filesystem.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
            max_ops: 40,
        }
    }

    /// Many long sequences, enough for users to hit the borrow limit and
    /// for removals to land on borrowed books.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 4000,
            max_ops: 200,
        }
    }

    /// Strategy for operation sequences of `1..max_ops` steps.
    pub fn operation_sequence(&self) -> impl Strategy<Value = Vec<LendingOperation>> {
        operation_sequence_strategy(1, self.max_ops)
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
