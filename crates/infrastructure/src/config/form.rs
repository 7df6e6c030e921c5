//! Registration form configuration

use domain::FormState;
use serde::{Deserialize, Deserializer, Serialize};

/// Registration form settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Event options offered on the form, in display order
    ///
    /// Accepts a list, or a comma-separated string as set through
    /// `KIOSK_FORM__EVENTS`.
    #[serde(default = "default_events", deserialize_with = "deserialize_events")]
    pub events: Vec<String>,
}

fn deserialize_events<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Events {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match Events::deserialize(deserializer)? {
        Events::List(events) => events,
        Events::Csv(csv) => csv
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(String::from)
            .collect(),
    })
}

fn default_events() -> Vec<String> {
    ["keynote", "workshop", "networking"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            events: default_events(),
        }
    }
}

impl FormConfig {
    /// Fresh form offering the configured events
    #[must_use]
    pub fn new_form(&self) -> FormState {
        FormState::new(&self.events)
    }
}
