//! One-shot validation of a complete form

use domain::{DomainError, FieldId, FormState, Validity, ViolationKind};
use serde::Serialize;

/// Raw values for every field, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub events: Vec<String>,
}

/// Result for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: FieldId,
    pub label: &'static str,
    pub validity: Validity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<ViolationKind>,
    pub message: String,
}

/// Result for the whole form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub fields: Vec<FieldReport>,
    pub submittable: bool,
}

impl ValidationReport {
    /// Human-readable rendering, one line per field
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for field in &self.fields {
            if field.validity == Validity::Valid {
                text.push_str(&format!("✅ {}\n", field.label));
            } else {
                text.push_str(&format!("❌ {}: {}\n", field.label, field.message));
            }
        }
        if self.submittable {
            text.push_str("\n🎉 Form can be submitted\n");
        } else {
            text.push_str("\n🚫 Form cannot be submitted\n");
        }
        text
    }
}

/// Fill a fresh form with `input` and validate every field
///
/// # Errors
///
/// Returns an error if a checked event is not one of the form's options.
pub fn validate(
    mut form: FormState,
    input: &FormInput,
) -> Result<ValidationReport, DomainError> {
    form.set_text(FieldId::Name, input.name.as_str())?;
    form.set_text(FieldId::Email, input.email.as_str())?;
    form.set_text(FieldId::Phone, input.phone.as_str())?;
    form.set_text(FieldId::Age, input.age.as_str())?;
    form.set_events(&input.events)?;

    let submittable = form.validate_form();
    let fields = form
        .fields()
        .iter()
        .map(|field| FieldReport {
            field: field.id(),
            label: field.id().label(),
            validity: field.validity(),
            violation: field.violation(),
            message: field.message().to_string(),
        })
        .collect();

    Ok(ValidationReport {
        fields,
        submittable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormState {
        FormState::new(["keynote", "workshop"])
    }

    fn valid_input() -> FormInput {
        FormInput {
            name: "Jo Li".to_string(),
            email: "a@b.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            age: "30".to_string(),
            events: vec!["keynote".to_string()],
        }
    }

    #[test]
    fn valid_form_is_submittable() {
        let report = validate(form(), &valid_input()).unwrap();
        assert!(report.submittable);
        assert!(report.fields.iter().all(|f| f.validity == Validity::Valid));
        assert!(report.fields.iter().all(|f| f.message.is_empty()));
    }

    #[test]
    fn each_failure_is_reported() {
        let input = FormInput {
            name: "Jo L".to_string(),
            age: "17".to_string(),
            events: Vec::new(),
            ..valid_input()
        };

        let report = validate(form(), &input).unwrap();
        assert!(!report.submittable);

        let failing: Vec<(FieldId, Option<ViolationKind>)> = report
            .fields
            .iter()
            .filter(|f| f.validity == Validity::Invalid)
            .map(|f| (f.field, f.violation))
            .collect();
        assert_eq!(
            failing,
            vec![
                (FieldId::Name, Some(ViolationKind::Format)),
                (FieldId::Age, Some(ViolationKind::Range)),
                (FieldId::Events, Some(ViolationKind::Empty)),
            ]
        );
    }

    #[test]
    fn unknown_event_is_an_error() {
        let input = FormInput {
            events: vec!["gala".to_string()],
            ..valid_input()
        };
        assert!(validate(form(), &input).is_err());
    }

    #[test]
    fn text_report_lists_every_field() {
        let input = FormInput {
            email: "a@b".to_string(),
            ..valid_input()
        };
        let text = validate(form(), &input).unwrap().to_text();

        assert!(text.contains("✅ Full name\n"));
        assert!(text.contains("❌ Email: Please enter a valid email\n"));
        assert!(text.ends_with("🚫 Form cannot be submitted\n"));
    }

    #[test]
    fn json_report_uses_snake_case_names() {
        let report = validate(form(), &valid_input()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["submittable"], true);
        assert_eq!(json["fields"][0]["field"], "name");
        assert_eq!(json["fields"][0]["validity"], "valid");
        assert!(json["fields"][0].get("violation").is_none());
    }
}
