//! Field rule violations
//!
//! A violation pairs the kind of failure with the message shown next to the field.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a field value failed its rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required value is missing
    Empty,
    /// Value is present but has the wrong shape
    Format,
    /// Value parsed but lies outside the accepted bounds
    Range,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Format => write!(f, "format"),
            Self::Range => write!(f, "range"),
        }
    }
}

/// A failed field rule with its user-facing message
///
/// Violations are recoverable: the user corrects the value and the field is
/// checked again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct FieldViolation {
    kind: ViolationKind,
    message: String,
}

impl FieldViolation {
    /// Create a violation of the given kind
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Required value is missing
    pub fn empty(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Empty, message)
    }

    /// Value has the wrong shape
    pub fn format(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Format, message)
    }

    /// Value is out of bounds
    pub fn range(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Range, message)
    }

    /// The kind of failure
    pub const fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// The message shown next to the field
    pub fn message(&self) -> &str {
        &self.message
    }
}
