//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::{WeatherPort, WeatherReport};
use async_trait::async_trait;
use integration_weather::{
    CurrentConditions, OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Message shown when a lookup is attempted without a city
const BLANK_CITY_MESSAGE: &str = "Please enter a city name";

/// Adapter for the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    ///
    /// API messages are passed through untouched so the user sees exactly
    /// what the provider said.
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::Api { message, .. } => ApplicationError::ServiceRejected(message),
            WeatherError::InvalidCity => {
                ApplicationError::ServiceRejected(BLANK_CITY_MESSAGE.to_string())
            },
            WeatherError::MissingApiKey => ApplicationError::Configuration(
                "weather.api_key is not set (use KIOSK_WEATHER__API_KEY)".to_string(),
            ),
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ParseError(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::RateLimitExceeded => {
                ApplicationError::ExternalService("Rate limit exceeded".to_string())
            },
        }
    }

    /// Convert integration conditions to the application report
    fn map_conditions(conditions: CurrentConditions) -> WeatherReport {
        WeatherReport {
            city: conditions.city,
            country: conditions.country,
            temperature: conditions.temperature,
            humidity: conditions.humidity,
            condition: conditions.condition,
            icon: conditions.icon,
            wind_speed: conditions.wind_speed,
            visibility: conditions.visibility,
            sunrise: conditions.sunrise,
            sunset: conditions.sunset,
            utc_offset_secs: conditions.utc_offset_secs,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ApplicationError> {
        let result = self
            .client
            .current_by_city(city)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(conditions) => {
                debug!(summary = %conditions.summary(), "Retrieved current weather");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.map(Self::map_conditions)
    }

    fn icon_url(&self, icon: &str) -> String {
        self.client.icon_url(icon)
    }
}
