//! Logging initialization
//!
//! Installs the global `tracing` subscriber with text or JSON output.

mod subscriber;

pub use subscriber::{TelemetryError, init_logging};
