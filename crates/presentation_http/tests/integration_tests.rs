//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{MarsWeatherPort, MarsWeatherService, error::ApplicationError};
use async_trait::async_trait;
use axum_test::TestServer;
use domain::WeatherDocument;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::{Value, json};

/// Mock upstream feed for testing
struct MockWeatherFeed {
    document: Option<Value>,
}

impl MockWeatherFeed {
    fn returning(document: Value) -> Self {
        Self {
            document: Some(document),
        }
    }

    fn failing() -> Self {
        Self { document: None }
    }
}

#[async_trait]
impl MarsWeatherPort for MockWeatherFeed {
    async fn fetch_weather(&self) -> Result<WeatherDocument, ApplicationError> {
        match &self.document {
            Some(doc) => Ok(serde_json::from_value(doc.clone()).expect("valid test document")),
            None => Err(ApplicationError::UpstreamFetch),
        }
    }
}

fn create_test_server(feed: MockWeatherFeed) -> TestServer {
    let state = AppState::new(MarsWeatherService::new(Arc::new(feed)));
    let router = create_router(state);
    TestServer::new(router).expect("Failed to create test server")
}

fn create_default_test_server() -> TestServer {
    create_test_server(MockWeatherFeed::returning(json!({ "sol_keys": [] })))
}

// ============================================================================
// Welcome route
// ============================================================================

#[tokio::test]
async fn welcome_returns_plain_text() {
    let server = create_default_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text("Welcome to the InSight Mars Weather Microservice!");
}

#[tokio::test]
async fn welcome_does_not_touch_upstream() {
    let server = create_test_server(MockWeatherFeed::failing());

    let response = server.get("/").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let server = create_default_test_server();

    let response = server.get("/weather").expect_failure().await;

    response.assert_status_not_found();
}

// ============================================================================
// Mars weather route
// ============================================================================

#[tokio::test]
async fn mars_weather_full_sol() {
    let server = create_test_server(MockWeatherFeed::returning(json!({
        "sol_keys": ["300"],
        "300": {
            "AT": { "mn": -90, "mx": -5, "av": -47 },
            "PRE": { "av": 750 },
            "HWS": { "av": 6 },
            "WD": { "most_common": { "compass_point": "W" } },
            "Season": "winter"
        }
    })));

    let response = server.get("/mars-weather").await;

    response.assert_status_ok();
    response.assert_json(&json!([{
        "sol": "300",
        "temperature": { "min": -90, "max": -5, "average": -47 },
        "pressure": 750,
        "wind": { "speed": 6, "direction": "W" },
        "season": "winter"
    }]));
}

#[tokio::test]
async fn mars_weather_sparse_sol_is_not_available() {
    let server = create_test_server(MockWeatherFeed::returning(json!({
        "sol_keys": ["301"],
        "301": {}
    })));

    let response = server.get("/mars-weather").await;

    response.assert_status_ok();
    response.assert_json(&json!([{
        "sol": "301",
        "temperature": { "min": "N/A", "max": "N/A", "average": "N/A" },
        "pressure": "N/A",
        "wind": { "speed": "N/A", "direction": "N/A" },
        "season": "N/A"
    }]));
}

#[tokio::test]
async fn mars_weather_no_sols_returns_message() {
    let server = create_default_test_server();

    let response = server.get("/mars-weather").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "No data available for recent Sols." }));
}

#[tokio::test]
async fn mars_weather_keeps_sol_order() {
    let server = create_test_server(MockWeatherFeed::returning(json!({
        "sol_keys": ["302", "300", "301"],
        "300": {},
        "301": {},
        "302": {}
    })));

    let response = server.get("/mars-weather").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let sols: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|s| s["sol"].as_str())
        .collect();
    assert_eq!(sols, ["302", "300", "301"]);
}

#[tokio::test]
async fn mars_weather_upstream_failure_returns_fixed_error() {
    let server = create_test_server(MockWeatherFeed::failing());

    let response = server.get("/mars-weather").expect_failure().await;

    response.assert_status_internal_server_error();
    response.assert_json(&json!({ "error": "Failed to retrieve Mars weather data" }));
}

#[tokio::test]
async fn mars_weather_malformed_entry_returns_fixed_error() {
    let server = create_test_server(MockWeatherFeed::returning(json!({
        "sol_keys": ["300"],
        "300": "not an object"
    })));

    let response = server.get("/mars-weather").expect_failure().await;

    response.assert_status_internal_server_error();
    response.assert_json(&json!({ "error": "Failed to retrieve Mars weather data" }));
}

#[tokio::test]
async fn mars_weather_is_json() {
    let server = create_default_test_server();

    let response = server.get("/mars-weather").await;

    let content_type = response.header("content-type");
    assert_eq!(content_type, "application/json");
}
