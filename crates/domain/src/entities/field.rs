//! Form field entity - One tracked input with its validity state

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::DomainError,
    rules::{self, FieldRule, RuleOutcome},
    value_objects::{FieldViolation, ViolationKind},
};

/// Identifies one of the registration form's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// Full name text input
    Name,
    /// Email text input
    Email,
    /// Phone text input
    Phone,
    /// Age numeric input
    Age,
    /// Event checkbox group
    Events,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [Self; 5] = [Self::Name, Self::Email, Self::Phone, Self::Age, Self::Events];

    /// Position of the field in form order
    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Age => 3,
            Self::Events => 4,
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Age => "Age",
            Self::Events => "Events",
        }
    }

    /// Name of the input element the field's feedback is attached to
    ///
    /// The event group has no single input; its feedback goes to the first
    /// checkbox, which only the form state knows.
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::Name => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Age => "age",
            Self::Events => "event",
        }
    }

    /// Whether the field holds free text
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Events)
    }

    /// The rule this field is checked against
    pub fn rule(self) -> FieldRule {
        match self {
            Self::Name => rules::check_name,
            Self::Email => rules::check_email,
            Self::Phone => rules::check_phone,
            Self::Age => rules::check_age,
            Self::Events => rules::check_events,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
            Self::Age => write!(f, "age"),
            Self::Events => write!(f, "events"),
        }
    }
}

impl FromStr for FieldId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "fullname" | "full_name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "age" => Ok(Self::Age),
            "events" | "event" => Ok(Self::Events),
            _ => Err(DomainError::UnknownField(s.to_string())),
        }
    }
}

/// Raw, unvalidated value of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum FieldValue {
    /// Text exactly as entered
    Text(String),
    /// Checked options of a checkbox group, in form order
    Choices(Vec<String>),
}

impl FieldValue {
    /// Empty value for the given field
    pub fn empty_for(field: FieldId) -> Self {
        if field.is_text() {
            Self::Text(String::new())
        } else {
            Self::Choices(Vec::new())
        }
    }

    /// Text content, or `""` for a checkbox group
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Choices(_) => "",
        }
    }

    /// Checked options, or none for a text value
    pub fn as_choices(&self) -> &[String] {
        match self {
            Self::Text(_) => &[],
            Self::Choices(c) => c,
        }
    }

    /// Whether nothing has been entered or checked
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Choices(c) => c.is_empty(),
        }
    }
}

/// Validity of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    /// Not checked since the form loaded or was reset
    #[default]
    Unvalidated,
    /// Last check passed
    Valid,
    /// Last check failed
    Invalid,
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unvalidated => write!(f, "unvalidated"),
            Self::Valid => write!(f, "valid"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

/// One tracked form field
///
/// Validity, message and violation kind are only ever written together by
/// [`Field::record`] or [`Field::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    id: FieldId,
    value: FieldValue,
    validity: Validity,
    #[serde(skip_serializing_if = "Option::is_none")]
    violation: Option<ViolationKind>,
    message: String,
}

impl Field {
    /// Create an empty, unvalidated field
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::empty_for(id),
            validity: Validity::Unvalidated,
            violation: None,
            message: String::new(),
        }
    }

    /// Field identifier
    pub const fn id(&self) -> FieldId {
        self.id
    }

    /// Current raw value
    pub const fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Current validity
    pub const fn validity(&self) -> Validity {
        self.validity
    }

    /// Kind of the last failure, if the field is invalid
    pub const fn violation(&self) -> Option<ViolationKind> {
        self.violation
    }

    /// Error message; empty unless the field is invalid
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the last check passed
    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    /// Replace the raw value without checking it
    pub(crate) fn set_value(&mut self, value: FieldValue) {
        self.value = value;
    }

    /// Run the field's rule on the current value and record the result
    pub(crate) fn validate(&mut self) -> bool {
        let outcome = (self.id.rule())(&self.value);
        self.record(&outcome);
        outcome.is_ok()
    }

    /// Record a rule outcome
    fn record(&mut self, outcome: &RuleOutcome) {
        match outcome {
            Ok(()) => {
                self.validity = Validity::Valid;
                self.violation = None;
                self.message.clear();
            },
            Err(violation) => self.record_violation(violation),
        }
    }

    fn record_violation(&mut self, violation: &FieldViolation) {
        self.validity = Validity::Invalid;
        self.violation = Some(violation.kind());
        self.message = violation.message().to_string();
    }

    /// Back to an empty, unvalidated field
    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.id);
    }
}
