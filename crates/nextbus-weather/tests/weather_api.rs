//! Integration tests for WeatherClient against a mock NWS upstream.

use nextbus_weather::{WeatherClient, WeatherError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "properties": {
            "periods": [
                {
                    "temperature": 61,
                    "temperatureUnit": "F",
                    "shortForecast": "Partly Cloudy",
                    "icon": "https://api.weather.gov/icons/land/day/sct"
                },
                {
                    "temperature": 58,
                    "temperatureUnit": "F",
                    "shortForecast": "Mostly Cloudy",
                    "icon": "https://api.weather.gov/icons/land/night/bkn"
                }
            ]
        }
    })
}

async fn mount_points(server: &MockServer) {
    let points_body = serde_json::json!({
        "properties": {
            "forecastHourly": format!("{}/gridpoints/MTR/85,105/forecast/hourly", server.uri())
        }
    });

    Mock::given(method("GET"))
        .and(path("/points/37.77,-122.42"))
        .and(header("user-agent", "NextBusDisplay/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&points_body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_current_conditions_two_step_lookup() {
    let server = MockServer::start().await;
    mount_points(&server).await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/MTR/85,105/forecast/hourly"))
        .and(header("user-agent", "NextBusDisplay/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let client = WeatherClient::new_with_base_url(&server.uri()).unwrap();
    let reading = client.current_conditions("37.77", "-122.42").await.unwrap();

    // First period wins.
    assert_eq!(reading.temperature, 61.0);
    assert_eq!(reading.unit, "F");
    assert_eq!(reading.description, "Partly Cloudy");
}

#[tokio::test]
async fn test_points_failure_maps_to_points_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/points/37.77,-122.42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = WeatherClient::new_with_base_url(&server.uri()).unwrap();
    let err = client.current_conditions("37.77", "-122.42").await.unwrap_err();

    assert!(matches!(err, WeatherError::PointsStatus(404)));
    assert_eq!(err.to_string(), "NWS points API returned 404");
}

#[tokio::test]
async fn test_forecast_failure_maps_to_forecast_status() {
    let server = MockServer::start().await;
    mount_points(&server).await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/MTR/85,105/forecast/hourly"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = WeatherClient::new_with_base_url(&server.uri()).unwrap();
    let err = client.current_conditions("37.77", "-122.42").await.unwrap_err();

    assert!(matches!(err, WeatherError::ForecastStatus(500)));
}

#[tokio::test]
async fn test_empty_forecast_periods_is_parse_error() {
    let server = MockServer::start().await;
    mount_points(&server).await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/MTR/85,105/forecast/hourly"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"properties": {"periods": []}})),
        )
        .mount(&server)
        .await;

    let client = WeatherClient::new_with_base_url(&server.uri()).unwrap();
    let err = client.current_conditions("37.77", "-122.42").await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
}

#[tokio::test]
async fn test_malformed_points_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/points/37.77,-122.42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = WeatherClient::new_with_base_url(&server.uri()).unwrap();
    let err = client.current_conditions("37.77", "-122.42").await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
}
