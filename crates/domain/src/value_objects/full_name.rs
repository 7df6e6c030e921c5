//! Full name value object
//!
//! A full name is at least a first and a last name.
//!
//! # Examples
//!
//! ```
//! use domain::FullName;
//!
//! let name = FullName::new("  Ada Lovelace ").unwrap();
//! assert_eq!(name.as_str(), "Ada Lovelace");
//!
//! // A single word is not a full name
//! assert!(FullName::new("Ada").is_err());
//! ```

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::FieldViolation;

/// Alphabetic first word, then one or more single-space separated words that
/// may also contain hyphens
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"^[a-zA-Z]+(?: [a-zA-Z-]+)+$").expect("name pattern is valid")
});

/// A validated full name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullName {
    value: String,
}

impl FullName {
    /// Message for a blank name
    pub const REQUIRED: &'static str = "Full name is required";
    /// Message for a name that is not "first last"
    pub const NOT_FULL: &'static str = "Please enter first and last name";
    /// Message for a name with a one-letter part
    pub const PART_TOO_SHORT: &'static str = "Each name part must be at least 2 characters";

    /// Minimum length of every space-separated part
    pub const MIN_PART_LEN: usize = 2;

    /// Validate a raw name value
    ///
    /// The value is trimmed before any check.
    pub fn new(raw: &str) -> Result<Self, FieldViolation> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(FieldViolation::empty(Self::REQUIRED));
        }

        if !NAME_PATTERN.is_match(value) {
            return Err(FieldViolation::format(Self::NOT_FULL));
        }

        if value.split(' ').any(|part| part.len() < Self::MIN_PART_LEN) {
            return Err(FieldViolation::format(Self::PART_TOO_SHORT));
        }

        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for FullName {
    type Error = FieldViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<FullName> for String {
    fn from(name: FullName) -> Self {
        name.value
    }
}

impl TryFrom<&str> for FullName {
    type Error = FieldViolation;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViolationKind;

    #[test]
    fn two_short_words_are_accepted() {
        let name = FullName::new("Jo Li").unwrap();
        assert_eq!(name.as_str(), "Jo Li");
    }

    #[test]
    fn one_letter_last_name_is_rejected() {
        let err = FullName::new("Jo L").unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Format);
        assert_eq!(err.message(), FullName::PART_TOO_SHORT);
    }

    #[test]
    fn blank_is_empty() {
        assert_eq!(FullName::new("").unwrap_err().kind(), ViolationKind::Empty);
        assert_eq!(
            FullName::new("   ").unwrap_err().message(),
            FullName::REQUIRED
        );
    }

    #[test]
    fn single_word_is_rejected() {
        let err = FullName::new("Cher").unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Format);
        assert_eq!(err.message(), FullName::NOT_FULL);
    }

    #[test]
    fn hyphen_allowed_after_first_word() {
        assert!(FullName::new("Mary Smith-Jones").is_ok());
        assert!(FullName::new("Jean-Luc Picard").is_err());
    }

    #[test]
    fn double_space_is_rejected() {
        assert!(FullName::new("Ada  Lovelace").is_err());
    }

    #[test]
    fn digits_are_rejected() {
        assert!(FullName::new("Ada L0velace").is_err());
    }

    #[test]
    fn three_words_accepted() {
        let name = FullName::new("Anna Maria Schmidt").unwrap();
        assert_eq!(name.as_str(), "Anna Maria Schmidt");
    }

    #[test]
    fn deserialization_validates() {
        let name: FullName = serde_json::from_str("\" Jo Li \"").unwrap();
        assert_eq!(name.as_str(), "Jo Li");
        assert!(serde_json::from_str::<FullName>("\"Cher\"").is_err());
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let name = FullName::new("\tGrace Hopper  ").unwrap();
        assert_eq!(name.to_string(), "Grace Hopper");
    }
}
