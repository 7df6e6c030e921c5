//! Form state - The registration form's fields and submit readiness
//!
//! The form owns one [`Field`] per [`FieldId`]. Every edit revalidates only
//! the edited field; [`FormState::submittable`] is derived from the current
//! field states and is therefore never stale.
//!
//! # Examples
//!
//! ```
//! use domain::{FieldId, FormState, SubmitOutcome};
//!
//! let mut form = FormState::new(["keynote", "workshop"]);
//! form.set_text(FieldId::Name, "Ada Lovelace").unwrap();
//! form.set_text(FieldId::Email, "ada@example.com").unwrap();
//! form.set_text(FieldId::Phone, "555 123 4567").unwrap();
//! form.set_text(FieldId::Age, "36").unwrap();
//! assert!(!form.submittable());
//!
//! form.set_event_checked("workshop", true).unwrap();
//! assert!(form.submittable());
//!
//! let outcome = form.submit();
//! assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
//! assert!(!form.submittable());
//! ```

use serde::Serialize;

use super::{Field, FieldId, FieldValue, Registration, Validity};
use crate::{
    errors::DomainError,
    value_objects::{Age, EmailAddress, EventSelection, FullName, PhoneNumber},
};

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SubmitOutcome {
    /// Every field passed; the form has been reset
    Accepted(Registration),
    /// At least one field failed; messages are left in place
    Rejected {
        /// Fields that failed, in form order
        invalid: Vec<FieldId>,
    },
}

impl SubmitOutcome {
    /// Whether the submission went through
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// The registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    fields: Vec<Field>,
    event_options: Vec<String>,
}

impl FormState {
    /// Create a form offering the given events, all fields unvalidated
    ///
    /// Blank and duplicate option names are dropped; order is kept.
    pub fn new<I, S>(event_options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options: Vec<String> = Vec::new();
        for option in event_options {
            let option = option.into().trim().to_string();
            if !option.is_empty() && !options.contains(&option) {
                options.push(option);
            }
        }

        Self {
            fields: FieldId::ALL.into_iter().map(Field::new).collect(),
            event_options: options,
        }
    }

    /// Events offered by the form, in display order
    pub fn event_options(&self) -> &[String] {
        &self.event_options
    }

    /// All fields in form order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// A single field
    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        &mut self.fields[id.index()]
    }

    /// Name of the element a field's feedback is attached to
    ///
    /// For the event group this is its first checkbox.
    pub fn anchor(&self, id: FieldId) -> &str {
        match id {
            FieldId::Events => self
                .event_options
                .first()
                .map_or(id.input_name(), String::as_str),
            _ => id.input_name(),
        }
    }

    /// Whether an event option is currently checked
    pub fn is_checked(&self, option: &str) -> bool {
        self.field(FieldId::Events)
            .value()
            .as_choices()
            .iter()
            .any(|o| o == option)
    }

    /// Store new text for a field and revalidate that field only
    ///
    /// Returns the field's updated state.
    pub fn set_text(&mut self, id: FieldId, raw: impl Into<String>) -> Result<Field, DomainError> {
        if !id.is_text() {
            return Err(DomainError::NotATextField(id));
        }
        let field = self.field_mut(id);
        field.set_value(FieldValue::Text(raw.into()));
        field.validate();
        Ok(field.clone())
    }

    /// Check or uncheck one event and revalidate the event group
    pub fn set_event_checked(&mut self, option: &str, checked: bool) -> Result<Field, DomainError> {
        if !self.event_options.iter().any(|o| o == option) {
            return Err(DomainError::UnknownEvent(option.to_string()));
        }

        let current = self.field(FieldId::Events).value().as_choices();
        let selection: Vec<String> = self
            .event_options
            .iter()
            .filter(|o| {
                if o.as_str() == option {
                    checked
                } else {
                    current.contains(*o)
                }
            })
            .cloned()
            .collect();

        Ok(self.replace_events(selection))
    }

    /// Replace the whole event selection and revalidate the event group
    ///
    /// Fails without changing anything if an option is not offered.
    pub fn set_events<S: AsRef<str>>(&mut self, checked: &[S]) -> Result<Field, DomainError> {
        if let Some(unknown) = checked
            .iter()
            .map(|c| c.as_ref())
            .find(|c| !self.event_options.iter().any(|o| o == c))
        {
            return Err(DomainError::UnknownEvent(unknown.to_string()));
        }

        let selection: Vec<String> = self
            .event_options
            .iter()
            .filter(|o| checked.iter().any(|c| c.as_ref() == o.as_str()))
            .cloned()
            .collect();

        Ok(self.replace_events(selection))
    }

    fn replace_events(&mut self, selection: Vec<String>) -> Field {
        let field = self.field_mut(FieldId::Events);
        field.set_value(FieldValue::Choices(selection));
        field.validate();
        field.clone()
    }

    /// Revalidate a single field with its current value
    pub fn validate_field(&mut self, id: FieldId) -> bool {
        self.field_mut(id).validate()
    }

    /// Revalidate every field and report whether all of them passed
    ///
    /// All fields are checked even after the first failure so every
    /// message is up to date.
    pub fn validate_form(&mut self) -> bool {
        self.fields
            .iter_mut()
            .map(Field::validate)
            .fold(true, |all, ok| all && ok)
    }

    /// Whether every field is currently valid
    pub fn submittable(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    /// Fields whose last check failed, in form order
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .filter(|f| f.validity() == Validity::Invalid)
            .map(Field::id)
            .collect()
    }

    /// Validate everything and, if it all passes, hand out the registration
    /// and reset the form
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.validate_form() {
            return SubmitOutcome::Rejected {
                invalid: self.invalid_fields(),
            };
        }

        match self.registration() {
            Ok(registration) => {
                self.reset();
                SubmitOutcome::Accepted(registration)
            },
            Err(DomainError::InvalidField { field, .. }) => SubmitOutcome::Rejected {
                invalid: vec![field],
            },
            Err(_) => SubmitOutcome::Rejected {
                invalid: self.invalid_fields(),
            },
        }
    }

    /// Build the typed registration from the current values
    pub fn registration(&self) -> Result<Registration, DomainError> {
        let name = FullName::new(self.text(FieldId::Name))
            .map_err(|v| DomainError::invalid_field(FieldId::Name, v))?;
        let email = EmailAddress::new(self.text(FieldId::Email))
            .map_err(|v| DomainError::invalid_field(FieldId::Email, v))?;
        let phone = PhoneNumber::new(self.text(FieldId::Phone))
            .map_err(|v| DomainError::invalid_field(FieldId::Phone, v))?;
        let age = Age::new(self.text(FieldId::Age))
            .map_err(|v| DomainError::invalid_field(FieldId::Age, v))?;
        let events = EventSelection::new(
            self.field(FieldId::Events)
                .value()
                .as_choices()
                .iter()
                .map(String::as_str),
        )
        .map_err(|v| DomainError::invalid_field(FieldId::Events, v))?;

        Ok(Registration {
            name,
            email,
            phone,
            age,
            events,
        })
    }

    fn text(&self, id: FieldId) -> &str {
        self.field(id).value().as_text()
    }

    /// Clear every field back to empty and unvalidated
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(Field::reset);
    }
}
