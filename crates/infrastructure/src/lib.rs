//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and loads configuration.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, FormConfig, LogFormat, LoggingConfig, WeatherAppConfig};
pub use telemetry::{TelemetryError, init_logging};
