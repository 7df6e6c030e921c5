//! Domain entities - The form and its fields

mod field;
mod form_state;
mod registration;

pub use field::{Field, FieldId, FieldValue, Validity};
pub use form_state::{FormState, SubmitOutcome};
pub use registration::Registration;
