//! Domain layer for the registration kiosk
//!
//! Contains the registration form model: field rules, validated value objects,
//! per-field validity tracking and the aggregate form state.
//! This layer performs no I/O and knows nothing about how fields are rendered.

pub mod entities;
pub mod errors;
pub mod rules;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
