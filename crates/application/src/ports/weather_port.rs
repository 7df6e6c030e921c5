//! Weather service port
//!
//! Defines the interface for looking up current conditions by city name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current conditions for a city, as reported by the weather provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// City name as the provider spells it
    pub city: String,
    /// ISO country code
    pub country: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Short condition text, e.g. "Clouds"
    pub condition: String,
    /// Provider icon code, e.g. "04d"
    pub icon: String,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Visibility in meters
    pub visibility: Option<u32>,
    /// Sunrise (UTC)
    pub sunrise: DateTime<Utc>,
    /// Sunset (UTC)
    pub sunset: DateTime<Utc>,
    /// City's offset from UTC in seconds, if known
    pub utc_offset_secs: Option<i32>,
}

/// Port for weather lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a city
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ApplicationError>;

    /// URL of the image for a provider icon code
    fn icon_url(&self, icon: &str) -> String;
}
