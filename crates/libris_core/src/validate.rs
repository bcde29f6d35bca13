//! Field validation rules.
//!
//! Every title, author and user ID passes through one of these functions,
//! both when an entity is built and whenever the field is changed later.

use crate::entity::UserId;
use crate::error::{LibraryError, LibraryResult};

/// Validates a book title.
///
/// A title must be non-empty and consist only of word characters
/// (letters, digits, underscore) and whitespace. The value is returned
/// unchanged.
///
/// # Errors
///
/// Returns [`LibraryError::InvalidField`] if the title is empty or
/// contains punctuation or symbols.
pub fn validate_title(value: impl Into<String>) -> LibraryResult<String> {
    let value = value.into();
    if value.is_empty() {
        return Err(LibraryError::invalid_field(
            "title",
            "must be a non-empty string",
        ));
    }
    if value.chars().any(|c| !is_word_or_space(c)) {
        return Err(LibraryError::invalid_field(
            "title",
            "must not contain special characters",
        ));
    }
    Ok(value)
}

/// Validates a book author.
///
/// # Errors
///
/// Returns [`LibraryError::InvalidField`] if the author is empty.
pub fn validate_author(value: impl Into<String>) -> LibraryResult<String> {
    let value = value.into();
    if value.is_empty() {
        return Err(LibraryError::invalid_field(
            "author",
            "must be a non-empty string",
        ));
    }
    Ok(value)
}

/// Validates a user ID.
///
/// # Errors
///
/// Returns [`LibraryError::InvalidField`] if the value is zero or negative.
pub fn validate_user_id(value: i64) -> LibraryResult<UserId> {
    if value <= 0 {
        return Err(invalid_user_id());
    }
    Ok(UserId(value))
}

/// Parses and validates a user ID given as text.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`LibraryError::InvalidField`] if the text is not a decimal
/// integer or the integer is not positive.
pub fn parse_user_id(text: &str) -> LibraryResult<UserId> {
    let value = text.trim().parse::<i64>().map_err(|_| invalid_user_id())?;
    validate_user_id(value)
}

fn invalid_user_id() -> LibraryError {
    LibraryError::invalid_field("user ID", "must be a positive integer")
}

fn is_word_or_space(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn title_accepts_words_digits_and_spaces() {
        for title in ["Dune", "Python for Beginners", "Catch 22", "snake_case", "Ελληνικά"] {
            assert_eq!(validate_title(title).unwrap(), title);
        }
    }

    #[test]
    fn title_is_stored_as_given() {
        assert_eq!(validate_title("  Dune  ").unwrap(), "  Dune  ");
    }

    #[test]
    fn title_rejects_empty() {
        let err = validate_title("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "invalid title: must be a non-empty string");
    }

    #[test]
    fn title_rejects_special_characters() {
        for title in ["Sci-Fi!", "Dune: Messiah", "C++", "What?", "a.b", "O'Brien"] {
            let err = validate_title(title).unwrap_err();
            assert!(
                matches!(err, LibraryError::InvalidField { field: "title", .. }),
                "{title:?} should be rejected"
            );
        }
    }

    #[test]
    fn author_accepts_punctuation() {
        assert_eq!(validate_author("J. R. R. Tolkien").unwrap(), "J. R. R. Tolkien");
    }

    #[test]
    fn author_rejects_empty() {
        let err = validate_author("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn user_id_must_be_positive() {
        assert_eq!(validate_user_id(1).unwrap().get(), 1);
        assert!(validate_user_id(0).is_err());
        assert!(validate_user_id(-5).is_err());
    }

    #[test]
    fn parse_user_id_text() {
        assert_eq!(parse_user_id("42").unwrap().get(), 42);
        assert_eq!(parse_user_id(" 7\n").unwrap().get(), 7);

        for text in ["", "abc", "1.5", "-3", "0", "4 2"] {
            let err = parse_user_id(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "{text:?}");
        }
    }

    proptest! {
        #[test]
        fn titles_with_a_symbol_are_rejected(
            prefix in "[a-zA-Z0-9 ]{0,12}",
            symbol in prop::sample::select(vec!['!', '-', ':', '?', '.', ',', '#', '&', '@']),
            suffix in "[a-zA-Z0-9 ]{0,12}",
        ) {
            let title = format!("{prefix}{symbol}{suffix}");
            prop_assert!(validate_title(title).is_err());
        }

        #[test]
        fn positive_ids_round_trip(id in 1i64..=i64::MAX) {
            prop_assert_eq!(validate_user_id(id).unwrap().get(), id);
            prop_assert_eq!(parse_user_id(&id.to_string()).unwrap().get(), id);
        }

        #[test]
        fn non_positive_ids_are_rejected(id in i64::MIN..=0) {
            prop_assert!(validate_user_id(id).is_err());
        }
    }
}
