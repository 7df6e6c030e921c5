//! Weather widget configuration

use integration_weather::WeatherConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// City looked up when no city is given
pub(super) const DEFAULT_CITY: &str = application::services::DEFAULT_CITY;

/// OpenWeatherMap access settings plus the widget's start city
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API key (sensitive - never serialized)
    ///
    /// Usually supplied as `KIOSK_WEATHER__API_KEY`.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL for condition icons
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// City shown at startup
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Unit system passed to the API
    #[serde(default = "default_units")]
    pub units: String,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("icon_base_url", &self.icon_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("default_city", &self.default_city)
            .field("units", &self.units)
            .finish()
    }
}

fn default_base_url() -> String {
    WeatherConfig::default().base_url
}

fn default_icon_base_url() -> String {
    WeatherConfig::default().icon_base_url
}

fn default_timeout() -> u64 {
    WeatherConfig::default().timeout_secs
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_units() -> String {
    WeatherConfig::default().units
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            icon_base_url: default_icon_base_url(),
            timeout_secs: default_timeout(),
            default_city: default_city(),
            units: default_units(),
        }
    }
}

impl WeatherAppConfig {
    /// Whether an API key is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Convert to the HTTP client configuration
    #[must_use]
    pub fn to_client_config(&self) -> WeatherConfig {
        WeatherConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            icon_base_url: self.icon_base_url.clone(),
            units: self.units.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
