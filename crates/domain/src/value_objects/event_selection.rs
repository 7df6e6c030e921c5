//! Event selection value object
//!
//! The set of events a registrant signed up for. At least one is required.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldViolation;

/// A non-empty selection of event names, in the order the form lists them
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct EventSelection {
    events: Vec<String>,
}

impl EventSelection {
    /// Message when nothing is checked
    pub const REQUIRED: &'static str = "Please select at least one event";

    /// Validate the checked events of a checkbox group
    pub fn new<I, S>(checked: I) -> Result<Self, FieldViolation>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let events: Vec<String> = checked.into_iter().map(Into::into).collect();
        if events.is_empty() {
            return Err(FieldViolation::empty(Self::REQUIRED));
        }
        Ok(Self { events })
    }

    /// The selected event names
    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Number of selected events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always false for a constructed selection
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Check if an event is part of the selection
    pub fn contains(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }
}

impl TryFrom<Vec<String>> for EventSelection {
    type Error = FieldViolation;

    fn try_from(events: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(events)
    }
}

impl From<EventSelection> for Vec<String> {
    fn from(selection: EventSelection) -> Self {
        selection.events
    }
}

impl fmt::Display for EventSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.events.join(", "))
    }
}
