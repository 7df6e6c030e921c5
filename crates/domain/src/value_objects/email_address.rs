//! Email address value object with validation
//!
//! The check is structural only: something, `@`, something, `.`, something,
//! with no whitespace and no second `@`.
//!
//! # Examples
//!
//! ```
//! use domain::EmailAddress;
//!
//! // Create a valid email address
//! let email = EmailAddress::new("user@example.com").unwrap();
//! assert_eq!(email.as_str(), "user@example.com");
//!
//! // Email addresses are normalized to lowercase
//! let email = EmailAddress::new("User@Example.COM").unwrap();
//! assert_eq!(email.as_str(), "user@example.com");
//!
//! // Invalid emails are rejected
//! assert!(EmailAddress::new("invalid").is_err());
//! ```

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::FieldViolation;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress {
    value: String,
}

impl EmailAddress {
    /// Message for a blank email
    pub const REQUIRED: &'static str = "Email is required";
    /// Message for a malformed email
    pub const INVALID: &'static str = "Please enter a valid email";

    /// Create a new email address, validating the format
    ///
    /// # Errors
    ///
    /// Returns an `Empty` violation for a blank value and a `Format`
    /// violation when the shape does not match.
    pub fn new(raw: &str) -> Result<Self, FieldViolation> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(FieldViolation::empty(Self::REQUIRED));
        }

        if !EMAIL_PATTERN.is_match(value) {
            return Err(FieldViolation::format(Self::INVALID));
        }

        Ok(Self {
            value: value.to_lowercase(),
        })
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = FieldViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.value
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = FieldViolation;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
