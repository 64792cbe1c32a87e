//! Field validation rules and the single domain error kind.
//!
//! # Invariants
//! - Lengths are counted in Unicode scalar values, not bytes.
//! - Magazine name bounds are identical for construction and rename.
//! - Validators never allocate on the success path.

use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum article title length (inclusive).
pub const TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length (inclusive).
pub const TITLE_MAX_CHARS: usize = 50;
/// Minimum magazine name length (inclusive).
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length (inclusive).
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;

/// Validation failure raised at the point a constraint is violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Article title length is outside `[5, 50]`.
    InvalidTitle { length: usize },
    /// Author name is empty.
    InvalidAuthorName,
    /// Magazine name length is outside `[2, 16]`.
    InvalidMagazineName { length: usize },
    /// Magazine category is empty.
    EmptyCategory,
    /// Author ID is not known to the catalog.
    UnknownAuthor(AuthorId),
    /// Magazine ID is not known to the catalog.
    UnknownMagazine(MagazineId),
    /// Article ID is not known to the catalog.
    UnknownArticle(ArticleId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle { length } => write!(
                f,
                "article title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters, got {length}"
            ),
            Self::InvalidAuthorName => write!(f, "author name must be a non-empty string"),
            Self::InvalidMagazineName { length } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN_CHARS} and {MAGAZINE_NAME_MAX_CHARS} characters, got {length}"
            ),
            Self::EmptyCategory => write!(f, "category must be a non-empty string"),
            Self::UnknownAuthor(id) => write!(f, "author not found: {id}"),
            Self::UnknownMagazine(id) => write!(f, "magazine not found: {id}"),
            Self::UnknownArticle(id) => write!(f, "article not found: {id}"),
        }
    }
}

impl Error for ValidationError {}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let length = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&length) {
        return Err(ValidationError::InvalidTitle { length });
    }
    Ok(())
}

pub fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::InvalidAuthorName);
    }
    Ok(())
}

pub fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&length) {
        return Err(ValidationError::InvalidMagazineName { length });
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        validate_author_name, validate_category, validate_magazine_name, validate_title,
        ValidationError,
    };

    #[test]
    fn title_bounds_are_inclusive() {
        assert_eq!(
            validate_title("abcd"),
            Err(ValidationError::InvalidTitle { length: 4 })
        );
        assert!(validate_title("abcde").is_ok());
        assert!(validate_title(&"x".repeat(50)).is_ok());
        assert_eq!(
            validate_title(&"x".repeat(51)),
            Err(ValidationError::InvalidTitle { length: 51 })
        );
    }

    #[test]
    fn title_length_counts_chars_not_bytes() {
        // 5 chars, 10 bytes.
        assert!(validate_title("ééééé").is_ok());
        assert!(validate_title("éééé").is_err());
    }

    #[test]
    fn magazine_name_bounds_are_inclusive() {
        assert_eq!(
            validate_magazine_name("V"),
            Err(ValidationError::InvalidMagazineName { length: 1 })
        );
        assert!(validate_magazine_name("AD").is_ok());
        assert!(validate_magazine_name(&"m".repeat(16)).is_ok());
        assert!(validate_magazine_name(&"m".repeat(17)).is_err());
    }

    #[test]
    fn empty_author_name_and_category_are_rejected() {
        assert_eq!(
            validate_author_name(""),
            Err(ValidationError::InvalidAuthorName)
        );
        assert!(validate_author_name(" ").is_ok());
        assert_eq!(validate_category(""), Err(ValidationError::EmptyCategory));
        assert!(validate_category("Fashion").is_ok());
    }

    #[test]
    fn messages_name_the_failed_constraint() {
        let message = ValidationError::InvalidTitle { length: 3 }.to_string();
        assert!(message.contains("between 5 and 50"));
        assert!(message.contains("got 3"));
        assert!(ValidationError::EmptyCategory
            .to_string()
            .contains("category"));
    }
}
