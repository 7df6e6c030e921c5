//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure and presentation layers
//! implement these ports.

mod form_view;
mod weather_port;

#[cfg(test)]
pub use form_view::MockFormView;
pub use form_view::FormView;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{WeatherPort, WeatherReport};
