//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current weather endpoint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, CurrentConditions};

/// `cod` value of a successful response
const SUCCESS_CODE: u16 = 200;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// City name is blank
    #[error("Invalid city: a city name is required")]
    InvalidCity,

    /// No API key configured
    #[error("No API key configured for the weather service")]
    MissingApiKey,

    /// The API answered with an error code and message
    #[error("{message}")]
    Api { code: u16, message: String },

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key (sensitive - never serialized)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL for condition icons (default: <https://openweathermap.org/img/wn>)
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,

    /// Unit system passed to the API (default: metric)
    #[serde(default = "default_units")]
    pub units: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("icon_base_url", &self.icon_base_url)
            .field("units", &self.units)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_icon_base_url() -> String {
    "https://openweathermap.org/img/wn".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            icon_base_url: default_icon_base_url(),
            units: default_units(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherConfig {
    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a city
    async fn current_by_city(&self, city: &str) -> Result<CurrentConditions, WeatherError>;

    /// URL of the 2x image for an icon code
    fn icon_url(&self, icon: &str) -> String;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate and normalize a city name
    fn validate_city(city: &str) -> Result<&str, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::InvalidCity);
        }
        Ok(city)
    }

    /// Build the endpoint URL (query string is added by the request builder)
    fn weather_url(&self) -> String {
        format!("{}/weather", self.config.base_url.trim_end_matches('/'))
    }

    /// Convert a successful API response into current conditions
    fn parse_conditions(response: ApiResponse) -> Result<CurrentConditions, WeatherError> {
        let main = response
            .main
            .ok_or_else(|| WeatherError::ParseError("No main block in response".to_string()))?;
        let sys = response
            .sys
            .ok_or_else(|| WeatherError::ParseError("No sys block in response".to_string()))?;
        let condition = response.weather.into_iter().next().ok_or_else(|| {
            WeatherError::ParseError("No weather conditions in response".to_string())
        })?;
        let wind = response
            .wind
            .ok_or_else(|| WeatherError::ParseError("No wind block in response".to_string()))?;

        Ok(CurrentConditions {
            city: response.name.unwrap_or_default(),
            country: sys.country.unwrap_or_default(),
            temperature: main.temp,
            humidity: main.humidity,
            condition: condition.main,
            icon: condition.icon,
            wind_speed: wind.speed,
            visibility: response.visibility,
            sunrise: Self::parse_timestamp(sys.sunrise)?,
            sunset: Self::parse_timestamp(sys.sunset)?,
            utc_offset_secs: response.timezone,
        })
    }

    /// Parse unix seconds to `DateTime<Utc>`
    fn parse_timestamp(secs: i64) -> Result<DateTime<Utc>, WeatherError> {
        DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| WeatherError::ParseError(format!("Invalid timestamp: {secs}")))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn current_by_city(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let city = Self::validate_city(city)?;
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(WeatherError::MissingApiKey)?;

        let url = self.weather_url();
        debug!(url = %url, units = %self.config.units, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", api_key.expose_secret()),
                ("units", self.config.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        // Error statuses usually still carry a JSON body with `cod` and `message`
        let api_response: ApiResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if status == reqwest::StatusCode::TOO_MANY_REQUESTS => {
                return Err(WeatherError::RateLimitExceeded);
            },
            Err(_) if status.is_server_error() => {
                return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
            },
            Err(_) if !status.is_success() => {
                return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
            },
            Err(e) => return Err(WeatherError::ParseError(e.to_string())),
        };

        let code = api_response.cod.unwrap_or_else(|| status.as_u16());
        if code != SUCCESS_CODE {
            let message = api_response
                .message_text()
                .unwrap_or_else(|| format!("HTTP {status}"));
            debug!(code, message = %message, "Weather API returned an error");
            return Err(WeatherError::Api { code, message });
        }

        Self::parse_conditions(api_response)
    }

    fn icon_url(&self, icon: &str) -> String {
        format!(
            "{}/{icon}@2x.png",
            self.config.icon_base_url.trim_end_matches('/')
        )
    }
}
