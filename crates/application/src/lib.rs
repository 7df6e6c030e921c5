//! Application layer - Use cases and orchestration
//!
//! Contains the form adapter that turns UI events into form state updates and
//! rendering calls, the weather lookup use case, and the port definitions that
//! front ends and infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
