//! Registration entity - The typed result of a successful submission

use serde::{Deserialize, Serialize};

use crate::value_objects::{Age, EmailAddress, EventSelection, FullName, PhoneNumber};

/// A completed, fully validated registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Registrant's full name
    pub name: FullName,
    /// Contact email
    pub email: EmailAddress,
    /// Contact phone
    pub phone: PhoneNumber,
    /// Age in years
    pub age: Age,
    /// Events signed up for
    pub events: EventSelection,
}

impl Registration {
    /// One-line summary for confirmation output
    pub fn summary(&self) -> String {
        format!(
            "{} <{}>, {}, age {}, events: {}",
            self.name, self.email, self.phone, self.age, self.events
        )
    }
}
