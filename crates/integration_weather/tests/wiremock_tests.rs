//! Integration tests for the weather client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample OpenWeatherMap current weather response
fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": -74.006, "lat": 40.7143 },
        "weather": [
            { "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }
        ],
        "base": "stations",
        "main": {
            "temp": 21.5,
            "feels_like": 21.2,
            "temp_min": 19.8,
            "temp_max": 23.1,
            "pressure": 1016,
            "humidity": 64
        },
        "visibility": 10000,
        "wind": { "speed": 4.63, "deg": 250 },
        "clouds": { "all": 75 },
        "dt": 1_700_020_000,
        "sys": {
            "type": 2,
            "id": 2_008_101,
            "country": "US",
            "sunrise": 1_700_000_000,
            "sunset": 1_700_036_000
        },
        "timezone": -18000,
        "id": 5_128_581,
        "name": "New York",
        "cod": 200
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherMapClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
        ..Default::default()
    }
    .with_api_key("test-key");
    #[allow(clippy::expect_used)]
    OpenWeatherMapClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the /weather endpoint with the given response
async fn setup_weather_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_current_by_city_success() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_weather_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("New York").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let weather = result.unwrap();
    assert_eq!(weather.city, "New York");
    assert_eq!(weather.country, "US");
    assert!((weather.temperature - 21.5).abs() < 0.01);
    assert_eq!(weather.humidity, 64);
    assert_eq!(weather.condition, "Clouds");
    assert_eq!(weather.icon, "04d");
    assert!((weather.wind_speed - 4.63).abs() < 0.01);
    assert_eq!(weather.visibility, Some(10_000));
    assert_eq!(weather.sunrise.timestamp(), 1_700_000_000);
    assert_eq!(weather.sunset.timestamp(), 1_700_036_000);
    assert_eq!(weather.utc_offset_secs, Some(-18_000));
}

#[tokio::test]
async fn test_query_parameters_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("  London  ").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_missing_visibility_is_tolerated() {
    let mock_server = MockServer::start().await;

    let mut body = sample_weather_response();
    if let Some(obj) = body.as_object_mut() {
        obj.remove("visibility");
    }

    setup_weather_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let weather = client.current_by_city("New York").await.unwrap();

    assert_eq!(weather.visibility, None);
}

// ============================================================================
// API error scenarios
// ============================================================================

#[tokio::test]
async fn test_city_not_found_returns_api_message() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("Atlantis").await;

    match result {
        Err(WeatherError::Api { code, message }) => {
            assert_eq!(code, 404);
            assert_eq!(message, "city not found");
        },
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_code_in_successful_http_response() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("Atlantis").await;

    assert!(
        matches!(result, Err(WeatherError::Api { code: 404, .. })),
        "Expected Api error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_api_key_returns_api_message() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("London").await;

    match result {
        Err(WeatherError::Api { code, message }) => {
            assert_eq!(code, 401);
            assert!(message.starts_with("Invalid API key"));
        },
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

// ============================================================================
// Transport error scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("London").await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(429).set_body_string("Too Many Requests"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("London").await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_with_api_message() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "cod": 429,
            "message": "Your account is temporarily blocked"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("London").await;

    match result {
        Err(WeatherError::Api { code, message }) => {
            assert_eq!(code, 429);
            assert_eq!(message, "Your account is temporarily blocked");
        },
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_without_json_body() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(403).set_body_string("Forbidden"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("London").await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("London").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_incomplete_payload_is_parse_error() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": 200,
            "name": "London"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("London").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

// ============================================================================
// Input validation scenarios
// ============================================================================

#[tokio::test]
async fn test_blank_city_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_by_city("   ").await;

    assert!(matches!(result, Err(WeatherError::InvalidCity)));
}

#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
        ..Default::default()
    };
    let client = OpenWeatherMapClient::new(config).unwrap();
    let result = client.current_by_city("London").await;

    assert!(matches!(result, Err(WeatherError::MissingApiKey)));
}

#[tokio::test]
async fn test_connection_refused() {
    let config = WeatherConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 1,
        ..Default::default()
    }
    .with_api_key("test-key");
    let client = OpenWeatherMapClient::new(config).unwrap();
    let result = client.current_by_city("London").await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}
