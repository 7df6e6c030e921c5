//! Weather lookup service
//!
//! Looks up current conditions for a city and maps them onto the fixed set of
//! display fields of the weather widget.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{WeatherPort, WeatherReport},
};

/// City looked up when the widget starts
pub const DEFAULT_CITY: &str = "New York";

/// UV index shown until a UV data source is wired in
pub const UV_INDEX_PLACEHOLDER: u8 = 5;

/// Air quality index shown until an AQI data source is wired in
pub const AIR_QUALITY_PLACEHOLDER: u16 = 105;

/// Display fields of the weather widget, ready to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDisplay {
    /// Rounded temperature, e.g. "21°C"
    pub temperature: String,
    /// "City, CC"
    pub location: String,
    /// Weekday and time of day at the location
    pub local_time: String,
    /// Condition text, e.g. "Clouds"
    pub condition: String,
    /// Condition icon image URL
    pub icon_url: String,
    /// Relative humidity, e.g. "64%"
    pub humidity: String,
    /// Wind speed as reported
    pub wind_speed: String,
    /// Visibility in kilometers, e.g. "10 km"
    pub visibility: String,
    /// Sunrise time of day
    pub sunrise: String,
    /// Sunset time of day
    pub sunset: String,
    /// UV index (placeholder)
    pub uv_index: u8,
    /// Air quality index (placeholder)
    pub air_quality: u16,
}

/// Weather widget use case
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("weather", &"dyn WeatherPort")
            .finish()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Look up a city and build its display
    ///
    /// Surrounding whitespace is ignored; a blank city is refused before any
    /// request is made.
    #[instrument(skip(self))]
    pub async fn lookup(&self, city: &str) -> Result<WeatherDisplay, ApplicationError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ApplicationError::ServiceRejected(
                "Please enter a city name".to_string(),
            ));
        }

        let report = self.weather.current_weather(city).await.inspect_err(|e| {
            warn!(error = %e, "Weather lookup failed");
        })?;
        debug!(city = %report.city, country = %report.country, "Weather report received");

        Ok(self.render(&report, Utc::now()))
    }

    /// Map a report onto display fields as of `now`
    pub fn render(&self, report: &WeatherReport, now: DateTime<Utc>) -> WeatherDisplay {
        let offset = report
            .utc_offset_secs
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());

        WeatherDisplay {
            temperature: format!("{}°C", round_half_up(report.temperature)),
            location: format!("{}, {}", report.city, report.country),
            local_time: now.with_timezone(&offset).format("%A %I:%M %p").to_string(),
            condition: report.condition.clone(),
            icon_url: self.weather.icon_url(&report.icon),
            humidity: format!("{}%", report.humidity),
            wind_speed: report.wind_speed.to_string(),
            visibility: report.visibility.map_or_else(
                || "n/a".to_string(),
                |meters| format!("{} km", f64::from(meters) / 1000.0),
            ),
            sunrise: time_of_day(report.sunrise, offset),
            sunset: time_of_day(report.sunset, offset),
            uv_index: UV_INDEX_PLACEHOLDER,
            air_quality: AIR_QUALITY_PLACEHOLDER,
        }
    }
}

/// Round to the nearest integer, halves towards positive infinity
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn time_of_day(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%I:%M %p").to_string()
}
