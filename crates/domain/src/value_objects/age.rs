//! Age value object
//!
//! Represents a registrant's age in whole years (18-120).
//!
//! # Examples
//!
//! ```
//! use domain::Age;
//!
//! let age = Age::new("42").unwrap();
//! assert_eq!(age.years(), 42);
//!
//! // Minors are rejected
//! assert!(Age::new("17").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldViolation;

/// A validated age in years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Age(u8);

impl Age {
    /// Youngest accepted age
    pub const MIN: u8 = 18;
    /// Oldest accepted age
    pub const MAX: u8 = 120;

    /// Message for a missing age
    pub const REQUIRED: &'static str = "Age is required";
    /// Message for a non-numeric age
    pub const NOT_A_NUMBER: &'static str = "Please enter a valid number";
    /// Message for an age below [`Age::MIN`]
    pub const TOO_YOUNG: &'static str = "You must be at least 18 years old";
    /// Message for an age above [`Age::MAX`]
    pub const TOO_OLD: &'static str = "Please enter a valid age";

    /// Validate a raw age value
    ///
    /// Only the empty string counts as missing. The number is read from the
    /// start of the value and anything after the digits is ignored, so
    /// `"25 years"` is 25.
    pub fn new(raw: &str) -> Result<Self, FieldViolation> {
        if raw.is_empty() {
            return Err(FieldViolation::empty(Self::REQUIRED));
        }

        let years =
            parse_leading_integer(raw).ok_or_else(|| FieldViolation::format(Self::NOT_A_NUMBER))?;

        if years < i64::from(Self::MIN) {
            return Err(FieldViolation::range(Self::TOO_YOUNG));
        }

        u8::try_from(years)
            .map_err(|_| FieldViolation::range(Self::TOO_OLD))
            .and_then(Self::try_from)
    }

    /// Age in years
    pub const fn years(self) -> u8 {
        self.0
    }
}

/// Read an optionally signed decimal integer from the start of `raw`
///
/// Leading whitespace is skipped and trailing characters are ignored.
/// Values too large for `i64` saturate.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .iter()
        .fold(0_i64, |acc, d| acc.saturating_mul(10).saturating_add(*d));

    Some(if negative { -magnitude } else { magnitude })
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Age {
    type Error = FieldViolation;

    fn try_from(years: u8) -> Result<Self, Self::Error> {
        if years < Self::MIN {
            return Err(FieldViolation::range(Self::TOO_YOUNG));
        }
        if years > Self::MAX {
            return Err(FieldViolation::range(Self::TOO_OLD));
        }
        Ok(Self(years))
    }
}

impl From<Age> for u8 {
    fn from(age: Age) -> Self {
        age.0
    }
}

impl TryFrom<&str> for Age {
    type Error = FieldViolation;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
