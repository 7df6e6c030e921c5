//! Weather data models
//!
//! Types for representing current conditions from the OpenWeatherMap API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Current conditions for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// City name as the API spells it
    pub city: String,
    /// ISO 3166 country code
    pub country: String,
    /// Temperature in the requested units (Celsius for `metric`)
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Condition group, e.g. "Rain"
    pub condition: String,
    /// Icon code, e.g. "10d"
    pub icon: String,
    /// Wind speed (m/s for `metric`)
    pub wind_speed: f64,
    /// Visibility in meters
    pub visibility: Option<u32>,
    /// Sunrise time (UTC)
    pub sunrise: DateTime<Utc>,
    /// Sunset time (UTC)
    pub sunset: DateTime<Utc>,
    /// Shift from UTC in seconds for the city
    pub utc_offset_secs: Option<i32>,
}

impl CurrentConditions {
    /// Get a formatted summary of current conditions
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}, {}: {} {:.1}°C, humidity {}%, wind {:.1} m/s",
            self.city, self.country, self.condition, self.temperature, self.humidity, self.wind_speed
        )
    }
}

/// Raw API response
///
/// Error responses carry only `cod` and `message`, so everything else is
/// optional here and checked when converting.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default, deserialize_with = "deserialize_code")]
    pub cod: Option<u16>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main: Option<MainData>,
    #[serde(default)]
    pub sys: Option<SysData>,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
    #[serde(default)]
    pub wind: Option<WindData>,
    #[serde(default)]
    pub visibility: Option<u32>,
    #[serde(default)]
    pub timezone: Option<i32>,
}

impl ApiResponse {
    /// Error message as text; the API sends it as a string, but be lenient
    pub fn message_text(&self) -> Option<String> {
        match &self.message {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Raw `main` block
#[derive(Debug, Clone, Deserialize)]
pub struct MainData {
    pub temp: f64,
    pub humidity: u8,
}

/// Raw `sys` block
#[derive(Debug, Clone, Deserialize)]
pub struct SysData {
    #[serde(default)]
    pub country: Option<String>,
    pub sunrise: i64,
    pub sunset: i64,
}

/// Raw entry of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionData {
    pub main: String,
    pub icon: String,
}

/// Raw `wind` block
#[derive(Debug, Clone, Deserialize)]
pub struct WindData {
    pub speed: f64,
}

/// `cod` is a number on success and a numeric string on errors
fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Number(u16),
        Text(String),
    }

    match Option::<Code>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Code::Number(n)) => Ok(Some(n)),
        Some(Code::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid cod: {s}"))),
    }
}
