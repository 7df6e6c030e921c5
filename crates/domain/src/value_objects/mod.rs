//! Value Objects - Immutable, validated field values

mod age;
mod email_address;
mod event_selection;
mod full_name;
mod phone_number;
mod violation;

pub use age::Age;
pub use email_address::EmailAddress;
pub use event_selection::EventSelection;
pub use full_name::FullName;
pub use phone_number::PhoneNumber;
pub use violation::{FieldViolation, ViolationKind};
