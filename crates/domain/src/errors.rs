//! Domain-level errors

use thiserror::Error;

use crate::{entities::FieldId, value_objects::FieldViolation};

/// Errors that can occur in the domain layer
///
/// Rule failures on user input are not errors: they are recorded on the
/// field. These variants cover misuse of the form model itself.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Field name not known to the form
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Text was written to the checkbox group
    #[error("Field does not accept text: {0}")]
    NotATextField(FieldId),

    /// Checkbox option not offered by the form
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    /// A field value failed its rule where a valid value was required
    #[error("Invalid {field}: {violation}")]
    InvalidField {
        field: FieldId,
        violation: FieldViolation,
    },
}

impl DomainError {
    /// Create an invalid field error
    pub const fn invalid_field(field: FieldId, violation: FieldViolation) -> Self {
        Self::InvalidField { field, violation }
    }
}
