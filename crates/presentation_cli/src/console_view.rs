//! Line-oriented rendering of the registration form
//!
//! Every feedback change becomes one printed line. The view also keeps the
//! currently shown error messages so callers can inspect them.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use application::FormView;
use domain::FieldId;
use tracing::{debug, warn};

/// [`FormView`] that writes to a terminal (or any writer)
#[derive(Debug)]
pub struct ConsoleFormView<W> {
    out: W,
    errors: BTreeMap<FieldId, String>,
    submit_enabled: bool,
}

impl<W: Write> ConsoleFormView<W> {
    /// Create a view writing to `out`
    pub const fn new(out: W) -> Self {
        Self {
            out,
            errors: BTreeMap::new(),
            submit_enabled: false,
        }
    }

    /// Error messages currently on screen, in form order
    pub const fn errors(&self) -> &BTreeMap<FieldId, String> {
        &self.errors
    }

    /// Whether the submit control is enabled
    pub const fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Print a prompt without a line break
    pub fn prompt(&mut self, text: &str) {
        let result = write!(self.out, "{text}: ").and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "Failed to write prompt");
        }
    }

    /// Print a free-form line
    pub fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{args}") {
            warn!(error = %e, "Failed to write to console");
        }
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FormView for ConsoleFormView<W> {
    fn show_error(&mut self, field: FieldId, anchor: &str, message: &str) {
        debug!(%field, anchor, "Showing error");
        self.errors.insert(field, message.to_string());
        self.say(format_args!("  ❌ {}: {message}", field.label()));
    }

    fn show_success(&mut self, field: FieldId, anchor: &str) {
        debug!(%field, anchor, "Showing success");
        self.errors.remove(&field);
        self.say(format_args!("  ✅ {}", field.label()));
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        if enabled != self.submit_enabled {
            self.submit_enabled = enabled;
            if enabled {
                self.say(format_args!("  🔓 Ready to submit"));
            }
        }
    }

    fn notify(&mut self, message: &str) {
        self.say(format_args!("📣 {message}"));
    }

    fn reset_inputs(&mut self) {
        self.say(format_args!("🧹 Form cleared"));
    }

    fn clear_all_feedback(&mut self) {
        self.errors.clear();
    }
}
