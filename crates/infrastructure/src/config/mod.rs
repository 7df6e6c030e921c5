//! Application configuration
//!
//! Split into focused sub-modules:
//! - `weather`: OpenWeatherMap access and the default city
//! - `form`: registration form options
//! - `logging`: log output format
//!
//! Values are layered: built-in defaults, then an optional `kiosk.toml`,
//! then `KIOSK_`-prefixed environment variables (`__` separates sections,
//! e.g. `KIOSK_WEATHER__API_KEY`). Environment values stay strings until
//! deserialized, so an all-digit API key keeps its leading zeros.

mod form;
mod logging;
mod weather;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use form::FormConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use weather::WeatherAppConfig;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "KIOSK";

/// Name of the optional configuration file (without extension)
pub const CONFIG_FILE: &str = "kiosk";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather widget configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Registration form configuration
    #[serde(default)]
    pub form: FormConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `kiosk.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::with_name(CONFIG_FILE).required(false),
            Self::environment(),
        )
    }

    /// Load configuration from an explicit file, then the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or a value has the
    /// wrong type.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true), Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn build<S>(file: S, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("weather.default_city", weather::DEFAULT_CITY)?
            .set_default("weather.units", "metric")?
            .set_default("logging.format", "text")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., KIOSK_WEATHER__API_KEY)
            .add_source(env);

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Render the effective configuration as TOML
    ///
    /// Secrets are never serialized, so the API key is absent from the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
