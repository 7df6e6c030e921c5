//! Phone number value object
//!
//! Punctuation and spacing are ignored; exactly ten digits must remain.
//! Numbers with a leading country code are therefore rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldViolation;

/// A validated ten-digit phone number, stored as digits only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    /// Message for a blank phone number
    pub const REQUIRED: &'static str = "Phone number is required";
    /// Message for the wrong number of digits
    pub const WRONG_LENGTH: &'static str = "Phone number must be 10 digits";

    /// Required digit count
    pub const DIGITS: usize = 10;

    /// Create a new phone number from any formatting of its digits
    pub fn new(raw: &str) -> Result<Self, FieldViolation> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(FieldViolation::empty(Self::REQUIRED));
        }

        let digits: String = value.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != Self::DIGITS {
            return Err(FieldViolation::format(Self::WRONG_LENGTH));
        }

        Ok(Self { digits })
    }

    /// Get digits only
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {}-{}",
            &self.digits[..3],
            &self.digits[3..6],
            &self.digits[6..]
        )
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = FieldViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.digits
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = FieldViolation;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
