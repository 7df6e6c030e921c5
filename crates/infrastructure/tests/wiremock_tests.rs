//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Weather adapter wired into the weather service against a mock server
//! - Configuration handling end to end

use std::sync::Arc;

use application::{ApplicationError, WeatherService};
use chrono::{TimeZone, Utc};
use infrastructure::{AppConfig, WeatherAdapter, WeatherAppConfig};
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn london_payload() -> serde_json::Value {
    serde_json::json!({
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
        "main": { "temp": 11.5, "humidity": 87 },
        "visibility": 8000,
        "wind": { "speed": 5.1 },
        "sys": { "country": "GB", "sunrise": 1_700_000_000, "sunset": 1_700_030_000 },
        "timezone": 0,
        "name": "London",
        "cod": 200
    })
}

fn app_config(server: &MockServer) -> WeatherAppConfig {
    WeatherAppConfig {
        api_key: Some(SecretString::from("test-key".to_string())),
        base_url: server.uri(),
        icon_base_url: "https://icons.test/img/wn".to_string(),
        timeout_secs: 5,
        ..Default::default()
    }
}

fn service(config: &WeatherAppConfig) -> WeatherService {
    let adapter = WeatherAdapter::with_config(config.to_client_config()).unwrap();
    WeatherService::new(Arc::new(adapter))
}

// ============================================================================
// Weather lookup through the adapter
// ============================================================================

mod weather_lookup_tests {
    use super::*;

    #[tokio::test]
    async fn lookup_renders_display_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "London"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london_payload()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let display = service(&app_config(&mock_server))
            .lookup("London")
            .await
            .unwrap();

        assert_eq!(display.temperature, "12°C");
        assert_eq!(display.location, "London, GB");
        assert_eq!(display.condition, "Rain");
        assert_eq!(display.icon_url, "https://icons.test/img/wn/10d@2x.png");
        assert_eq!(display.humidity, "87%");
        assert_eq!(display.wind_speed, "5.1");
        assert_eq!(display.visibility, "8 km");
        // 1_700_000_000 is 22:13:20 UTC
        assert_eq!(display.sunrise, "10:13 PM");
        assert_eq!(display.uv_index, 5);
        assert_eq!(display.air_quality, 105);
    }

    #[tokio::test]
    async fn render_uses_payload_offset_for_local_time() {
        let mock_server = MockServer::start().await;

        let mut payload = london_payload();
        payload["timezone"] = serde_json::json!(3600);
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload))
            .mount(&mock_server)
            .await;

        let config = app_config(&mock_server);
        let adapter = Arc::new(WeatherAdapter::with_config(config.to_client_config()).unwrap());
        let report = application::WeatherPort::current_weather(adapter.as_ref(), "London")
            .await
            .unwrap();

        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let display = WeatherService::new(adapter).render(&report, now);
        assert_eq!(display.local_time, "Monday 01:00 PM");
        assert_eq!(display.sunrise, "11:13 PM");
    }

    #[tokio::test]
    async fn city_not_found_message_reaches_the_user() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "cod": "404",
                "message": "city not found"
            })))
            .mount(&mock_server)
            .await;

        let err = service(&app_config(&mock_server))
            .lookup("Atlantis")
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ServiceRejected(_)));
        assert_eq!(err.to_string(), "city not found");
    }

    #[tokio::test]
    async fn missing_api_key_is_a_configuration_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london_payload()))
            .expect(0)
            .mount(&mock_server)
            .await;

        let config = WeatherAppConfig {
            api_key: None,
            ..app_config(&mock_server)
        };
        let err = service(&config).lookup("London").await.unwrap_err();

        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[tokio::test]
    async fn server_error_is_external() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let err = service(&app_config(&mock_server))
            .lookup("London")
            .await
            .unwrap_err();

        assert!(err.is_external());
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod config_tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_from_file_feeds_the_weather_client() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "[weather]\nbase_url = \"http://localhost:9\"\ndefault_city = \"Lisbon\"\n"
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.weather.default_city, "Lisbon");

        let client = config.weather.to_client_config();
        assert_eq!(client.base_url, "http://localhost:9");
        assert!(WeatherAdapter::with_config(client).is_ok());
    }

    #[test]
    fn default_form_has_three_events() {
        let form = AppConfig::default().form.new_form();
        assert_eq!(form.event_options().len(), 3);
    }
}
