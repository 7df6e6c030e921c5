//! Registration form service
//!
//! Translates UI events into form state updates and form state updates into
//! calls on a [`FormView`]. Each input event revalidates only the edited
//! field and then recomputes whether the form may be submitted.

use domain::{Field, FieldId, FormState, Registration, SubmitOutcome, Validity};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{error::ApplicationError, ports::FormView};

/// Notice shown after an accepted submission
pub const SUCCESS_NOTICE: &str = "Registration successful! Thank you.";

/// A user interaction with the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FormEvent {
    /// Text typed into one of the text fields
    Input {
        /// The edited field
        field: FieldId,
        /// Its complete new value
        value: String,
    },
    /// An event checkbox was checked or unchecked
    EventToggled {
        /// The checkbox's option name
        option: String,
        /// New checked state
        checked: bool,
    },
    /// The submit control was activated
    Submit,
}

/// What handling an event led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// A field was revalidated
    Updated {
        /// The field's new state
        field: Field,
        /// Whether the form can now be submitted
        submittable: bool,
    },
    /// The form was submitted and reset
    Submitted(Registration),
    /// Submission was refused; the listed fields carry error messages
    Rejected(Vec<FieldId>),
}

/// Drives a [`FormState`] from UI events and renders it through a [`FormView`]
#[derive(Debug)]
pub struct RegistrationService<V> {
    form: FormState,
    view: V,
}

impl<V: FormView> RegistrationService<V> {
    /// Create a service around a form
    ///
    /// The submit control is enabled only if the form is already submittable.
    pub fn new(form: FormState, mut view: V) -> Self {
        view.set_submit_enabled(form.submittable());
        Self { form, view }
    }

    /// Current form state
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    /// The rendering surface
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// The rendering surface, for writes the service does not drive
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Handle one UI event
    ///
    /// Submission never navigates anywhere on its own: the caller receives
    /// the [`Registration`] and decides what to do with it.
    #[instrument(skip(self, event), fields(event = event_name(&event)))]
    pub fn handle(&mut self, event: FormEvent) -> Result<EventOutcome, ApplicationError> {
        match event {
            FormEvent::Input { field, value } => {
                let field = self.form.set_text(field, value)?;
                Ok(self.after_edit(field))
            },
            FormEvent::EventToggled { option, checked } => {
                let field = self.form.set_event_checked(&option, checked)?;
                Ok(self.after_edit(field))
            },
            FormEvent::Submit => Ok(self.submit()),
        }
    }

    /// Replace the whole event selection at once
    pub fn select_events<S: AsRef<str>>(
        &mut self,
        checked: &[S],
    ) -> Result<EventOutcome, ApplicationError> {
        let field = self.form.set_events(checked)?;
        Ok(self.after_edit(field))
    }

    /// Dirty field, then that field's feedback, then the aggregate flag
    fn after_edit(&mut self, field: Field) -> EventOutcome {
        self.render_field(&field);
        let submittable = self.form.submittable();
        self.view.set_submit_enabled(submittable);
        debug!(field = %field.id(), validity = %field.validity(), submittable, "Field revalidated");
        EventOutcome::Updated { field, submittable }
    }

    fn submit(&mut self) -> EventOutcome {
        let outcome = self.form.submit();

        match outcome {
            SubmitOutcome::Accepted(registration) => {
                info!(events = registration.events.len(), "Registration accepted");
                self.view.notify(SUCCESS_NOTICE);
                self.view.reset_inputs();
                self.view.set_submit_enabled(false);
                self.view.clear_all_feedback();
                EventOutcome::Submitted(registration)
            },
            SubmitOutcome::Rejected { invalid } => {
                let fields: Vec<Field> = self.form.fields().to_vec();
                for field in &fields {
                    self.render_field(field);
                }
                self.view.set_submit_enabled(false);
                debug!(invalid = ?invalid, "Registration rejected");
                EventOutcome::Rejected(invalid)
            },
        }
    }

    fn render_field(&mut self, field: &Field) {
        let anchor = self.form.anchor(field.id());
        match field.validity() {
            Validity::Valid => self.view.show_success(field.id(), anchor),
            Validity::Invalid => self.view.show_error(field.id(), anchor, field.message()),
            Validity::Unvalidated => {},
        }
    }
}

const fn event_name(event: &FormEvent) -> &'static str {
    match event {
        FormEvent::Input { .. } => "input",
        FormEvent::EventToggled { .. } => "event_toggled",
        FormEvent::Submit => "submit",
    }
}
