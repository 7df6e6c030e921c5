//! Form view port
//!
//! Defines how form state changes reach the screen. A front end implements
//! this trait; the registration service decides what to show and when.

use domain::FieldId;
#[cfg(test)]
use mockall::automock;

/// Rendering surface for the registration form
#[cfg_attr(test, automock)]
pub trait FormView {
    /// Mark a field as failing and show its message
    ///
    /// `anchor` names the element the feedback is attached to; for the event
    /// group it is the first checkbox.
    fn show_error(&mut self, field: FieldId, anchor: &str, message: &str);

    /// Mark a field as passing and clear its message
    fn show_success(&mut self, field: FieldId, anchor: &str);

    /// Enable or disable the submit control
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Show a blocking notice to the user
    fn notify(&mut self, message: &str);

    /// Clear every input back to empty / unchecked
    fn reset_inputs(&mut self);

    /// Remove every success/error indicator and message on the page,
    /// including elements the form does not track
    fn clear_all_feedback(&mut self);
}
