use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;

use outfit_api::api::{create_router, AppState};
use outfit_api::error::{AppError, AppResult};
use outfit_api::models::{Coordinates, WeatherReading};
use outfit_api::services::providers::WeatherProvider;

/// Provider that always reports the same weather and counts its calls
struct FixedWeather {
    temperature: Option<f64>,
    condition: Option<&'static str>,
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl WeatherProvider for FixedWeather {
    async fn current_weather(&self, _coordinates: &Coordinates) -> AppResult<WeatherReading> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(WeatherReading {
            provider: "fixed".to_string(),
            temperature: self.temperature,
            condition: self.condition.map(str::to_string),
            feels_like: None,
            humidity: None,
            wind_speed: None,
            observed_at: Utc::now(),
        })
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

struct FailingWeather;

#[async_trait::async_trait]
impl WeatherProvider for FailingWeather {
    async fn current_weather(&self, _coordinates: &Coordinates) -> AppResult<WeatherReading> {
        Err(AppError::ExternalApi("API returned status 503".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

fn server_with(provider: Arc<dyn WeatherProvider>) -> TestServer {
    let state = AppState::new(provider, Duration::from_secs(1));
    TestServer::new(create_router(state)).unwrap()
}

fn assert_error_envelope(response: &axum_test::TestResponse, error_status: &str) {
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_status"], error_status);
    assert!(body["error"].as_str().is_some());
}

fn create_test_server(
    temperature: f64,
    condition: &'static str,
) -> (TestServer, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = FixedWeather {
        temperature: Some(temperature),
        condition: Some(condition),
        calls: calls.clone(),
    };
    (server_with(Arc::new(provider)), calls)
}

#[tokio::test]
async fn test_health_check() {
    let (server, _) = create_test_server(20.0, "Clear");
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_recommendation() {
    let (server, calls) = create_test_server(23.0, "Clear");

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "latitude": 37.5665, "longitude": 126.978 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    assert_eq!(created["bucket"], "warm");
    assert_eq!(created["weather_source"], "provider");
    assert_eq!(created["weather"]["temperature"], 23.0);
    assert_eq!(created["option_1"], "반팔티 + 와이드 팬츠 + 스니커즈");
    assert!(created["explanation"].as_str().unwrap().contains("23"));
    assert!(created["id"].as_str().is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_snow_overrides_heat() {
    let (server, _) = create_test_server(30.0, "Snow");

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "latitude": 0.0, "longitude": 0.0 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    assert_eq!(created["bucket"], "snow");
    assert_eq!(created["option_1"], "롱패딩 + 니트 + 와이드 슬랙스 + 스니커즈");
}

#[tokio::test]
async fn test_failing_provider_falls_back_to_defaults() {
    let server = server_with(Arc::new(FailingWeather));

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "latitude": 37.5, "longitude": 127.0 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    assert_eq!(created["weather_source"], "default");
    assert_eq!(created["weather"]["temperature"], 20.0);
    assert_eq!(created["weather"]["condition"], "Clear");
    assert_eq!(created["bucket"], "pleasant");
}

#[tokio::test]
async fn test_incomplete_reading_defaults_missing_fields() {
    let provider = FixedWeather {
        temperature: None,
        condition: Some("Rain"),
        calls: Arc::new(AtomicUsize::new(0)),
    };
    let server = server_with(Arc::new(provider));

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "latitude": 37.5, "longitude": 127.0 }))
        .await;

    let created: serde_json::Value = response.json();
    assert_eq!(created["weather_source"], "provider");
    assert_eq!(created["weather"]["temperature"], 20.0);
    assert_eq!(created["bucket"], "rain");
}

#[tokio::test]
async fn test_invalid_coordinates_rejected() {
    let (server, calls) = create_test_server(20.0, "Clear");

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "latitude": 91.0, "longitude": 0.0 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_status"], "invalid_coordinate");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_history_and_lookup() {
    let (server, _) = create_test_server(-10.0, "Clear");

    let first: serde_json::Value = server
        .post("/api/v1/recommendations")
        .json(&json!({ "latitude": 1.0, "longitude": 1.0 }))
        .await
        .json();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second: serde_json::Value = server
        .post("/api/v1/recommendations")
        .json(&json!({ "latitude": 2.0, "longitude": 2.0 }))
        .await
        .json();

    let response = server.get("/api/v1/recommendations").await;
    response.assert_status_ok();
    let history: Vec<serde_json::Value> = response.json();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["id"], second["id"]);
    assert_eq!(history[1]["id"], first["id"]);

    let limited: Vec<serde_json::Value> = server
        .get("/api/v1/recommendations")
        .add_query_param("page_size", 1)
        .await
        .json();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0]["id"], second["id"]);

    let aliased: Vec<serde_json::Value> = server
        .get("/api/v1/recommendations")
        .add_query_param("limit", 1)
        .await
        .json();
    assert_eq!(aliased.len(), 1);

    let id = first["id"].as_str().unwrap();
    let response = server.get(&format!("/api/v1/recommendations/{}", id)).await;
    response.assert_status_ok();
    let fetched: serde_json::Value = response.json();
    assert_eq!(fetched["bucket"], "frigid");
    assert_eq!(fetched["latitude"], 1.0);
}

#[tokio::test]
async fn test_unknown_recommendation_is_not_found() {
    let (server, _) = create_test_server(20.0, "Clear");

    let response = server
        .get(&format!("/api/v1/recommendations/{}", uuid::Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_status"], "not_found");
}

#[tokio::test]
async fn test_preview_uses_given_weather() {
    let (server, calls) = create_test_server(35.0, "Clear");

    let response = server
        .get("/api/v1/recommendations/preview")
        .add_query_param("temperature", -5)
        .add_query_param("condition", "Clear")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["bucket"], "frigid");
    assert!(body["explanation"].as_str().unwrap().contains("-5"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_preview_condition_is_case_insensitive_and_optional() {
    let (server, _) = create_test_server(20.0, "Clear");

    let upper: serde_json::Value = server
        .get("/api/v1/recommendations/preview")
        .add_query_param("temperature", 5)
        .add_query_param("condition", "RAIN")
        .await
        .json();
    let lower: serde_json::Value = server
        .get("/api/v1/recommendations/preview")
        .add_query_param("temperature", 5)
        .add_query_param("condition", "rain")
        .await
        .json();
    assert_eq!(upper, lower);
    assert_eq!(upper["bucket"], "rain");

    let no_condition: serde_json::Value = server
        .get("/api/v1/recommendations/preview")
        .add_query_param("temperature", 35)
        .await
        .json();
    assert_eq!(no_condition["bucket"], "sweltering");
}

#[tokio::test]
async fn test_preview_rejects_non_finite_temperature() {
    let (server, _) = create_test_server(20.0, "Clear");

    let response = server
        .get("/api/v1/recommendations/preview")
        .add_query_param("temperature", "NaN")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let (server, _) = create_test_server(20.0, "Clear");
    let id = uuid::Uuid::new_v4().to_string();

    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_str(&id).unwrap(),
        )
        .await;

    assert_eq!(response.header("x-request-id").to_str().unwrap(), id);

    let generated = server.get("/health").await;
    assert!(uuid::Uuid::parse_str(generated.header("x-request-id").to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_missing_coordinate_is_invalid_coordinate() {
    let (server, calls) = create_test_server(20.0, "Clear");

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "latitude": 1.0 }))
        .await;

    assert_error_envelope(&response, "invalid_coordinate");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_non_numeric_coordinate_is_invalid_coordinate() {
    let (server, _) = create_test_server(20.0, "Clear");

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "latitude": "abc", "longitude": 0 }))
        .await;

    assert_error_envelope(&response, "invalid_coordinate");
}

#[tokio::test]
async fn test_malformed_id_uses_error_envelope() {
    let (server, _) = create_test_server(20.0, "Clear");

    let response = server.get("/api/v1/recommendations/not-a-uuid").await;

    assert_error_envelope(&response, "invalid_input");
}

#[tokio::test]
async fn test_preview_without_temperature_uses_error_envelope() {
    let (server, _) = create_test_server(20.0, "Clear");

    let response = server.get("/api/v1/recommendations/preview").await;

    assert_error_envelope(&response, "invalid_input");
}

#[tokio::test]
async fn test_non_numeric_page_size_uses_error_envelope() {
    let (server, _) = create_test_server(20.0, "Clear");

    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("page_size", "abc")
        .await;

    assert_error_envelope(&response, "invalid_input");
}

#[tokio::test]
async fn test_history_keeps_newest_records_up_to_capacity() {
    let state = AppState::new(
        Arc::new(FixedWeather {
            temperature: Some(20.0),
            condition: Some("Clear"),
            calls: Arc::new(AtomicUsize::new(0)),
        }),
        Duration::from_secs(1),
    )
    .with_history_capacity(2);
    let server = TestServer::new(create_router(state)).unwrap();

    let mut ids = Vec::new();
    for latitude in [1.0, 2.0, 3.0] {
        let created: serde_json::Value = server
            .post("/api/v1/recommendations")
            .json(&json!({ "latitude": latitude, "longitude": 0.0 }))
            .await
            .json();
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    let history: Vec<serde_json::Value> = server.get("/api/v1/recommendations").await.json();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["id"], ids[2].as_str());
    assert_eq!(history[1]["id"], ids[1].as_str());

    server
        .get(&format!("/api/v1/recommendations/{}", ids[0]))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
