//! Application services - Use case implementations

mod registration_service;
mod weather_service;

pub use registration_service::{EventOutcome, FormEvent, RegistrationService, SUCCESS_NOTICE};
pub use weather_service::{
    AIR_QUALITY_PLACEHOLDER, DEFAULT_CITY, UV_INDEX_PLACEHOLDER, WeatherDisplay, WeatherService,
};
