//! Field rules
//!
//! Each rule is a pure function from a raw field value to pass or fail.
//! Rules delegate to the value object constructors so that a value passing
//! its rule can always be turned into the typed value.

use crate::{
    entities::FieldValue,
    value_objects::{Age, EmailAddress, EventSelection, FieldViolation, FullName, PhoneNumber},
};

/// Result of applying a rule
pub type RuleOutcome = Result<(), FieldViolation>;

/// A stateless, side-effect free field check
pub type FieldRule = fn(&FieldValue) -> RuleOutcome;

/// At least a first and a last name
pub fn check_name(value: &FieldValue) -> RuleOutcome {
    FullName::new(value.as_text()).map(drop)
}

/// Structural email check
pub fn check_email(value: &FieldValue) -> RuleOutcome {
    EmailAddress::new(value.as_text()).map(drop)
}

/// Ten digits once punctuation is stripped
pub fn check_phone(value: &FieldValue) -> RuleOutcome {
    PhoneNumber::new(value.as_text()).map(drop)
}

/// Integer between 18 and 120
pub fn check_age(value: &FieldValue) -> RuleOutcome {
    Age::new(value.as_text()).map(drop)
}

/// At least one checked event
pub fn check_events(value: &FieldValue) -> RuleOutcome {
    EventSelection::new(value.as_choices().iter().map(String::as_str)).map(drop)
}
