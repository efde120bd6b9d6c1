//! Integration tests for the weather lookup adapter.
//!
//! These tests stand up a local axum stub of the WeatherAPI.com
//! current-conditions endpoint and drive the real client against it, so the
//! request formatting, status handling, and response normalization are all
//! exercised end to end without touching the network.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};

use office_mcp_servers::core::config::{CredentialsConfig, WeatherConfig};
use office_mcp_servers::domains::tools::definitions::weather::{
    WeatherClient, WeatherError, WeatherReport,
};

/// Bind the stub router on an ephemeral loopback port.
async fn spawn_stub(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, timeout_secs: u64) -> WeatherClient {
    let weather = WeatherConfig {
        api_url: format!("http://{}/v1/current.json", addr),
        timeout_secs,
    };
    let credentials = CredentialsConfig {
        weather_api_key: Some("test-key".to_string()),
    };
    WeatherClient::new(&weather, &credentials)
}

fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "location": { "name": "New York", "region": "New York" },
        "current": {
            "temp_f": 72.0,
            "temp_c": 22.2,
            "condition": { "text": "Sunny" },
            "humidity": 40,
            "wind_mph": 5.0,
            "feelslike_f": 70.0,
            "last_updated": "2024-01-01 12:00"
        }
    })
}

/// Stub that validates the query parameters the client is expected to send
/// before answering with the canned conditions.
async fn current_ok(
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<serde_json::Value>) {
    if params.get("key").map(String::as_str) != Some("test-key")
        || params.get("aqi").map(String::as_str) != Some("no")
        || params.get("q").map(String::as_str) != Some("10001")
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "unexpected query parameters" })),
        );
    }
    (StatusCode::OK, Json(sample_body()))
}

#[tokio::test]
async fn well_formed_response_is_normalized() {
    let addr = spawn_stub(Router::new().route("/v1/current.json", get(current_ok))).await;
    let client = client_for(addr, 5);

    let report = client.current_by_zipcode("10001").await.unwrap();
    assert_eq!(
        report,
        WeatherReport {
            location: "New York, New York".to_string(),
            zipcode: "10001".to_string(),
            temperature_f: 72.0,
            temperature_c: 22.2,
            condition: "Sunny".to_string(),
            humidity: 40,
            wind_mph: 5.0,
            feels_like_f: 70.0,
            last_updated: "2024-01-01 12:00".to_string(),
        }
    );
}

#[tokio::test]
async fn missing_field_is_malformed_response() {
    async fn current_missing_condition() -> Json<serde_json::Value> {
        let mut body = sample_body();
        body["current"]
            .as_object_mut()
            .unwrap()
            .remove("condition");
        Json(body)
    }

    let addr = spawn_stub(
        Router::new().route("/v1/current.json", get(current_missing_condition)),
    )
    .await;
    let client = client_for(addr, 5);

    let error = client.current_by_zipcode("10001").await.unwrap_err();
    assert_eq!(error, WeatherError::MalformedResponse("condition".into()));
    assert_eq!(error.to_string(), "Missing key: condition");
}

#[tokio::test]
async fn server_error_status_is_request_failed() {
    async fn current_unavailable() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    let addr =
        spawn_stub(Router::new().route("/v1/current.json", get(current_unavailable))).await;
    let client = client_for(addr, 5);

    let error = client.current_by_zipcode("10001").await.unwrap_err();
    match error {
        WeatherError::RequestFailed(message) => assert!(message.contains("500")),
        other => panic!("Expected RequestFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn slow_provider_hits_the_bounded_timeout() {
    async fn current_slow() -> Json<serde_json::Value> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Json(sample_body())
    }

    let addr = spawn_stub(Router::new().route("/v1/current.json", get(current_slow))).await;
    let client = client_for(addr, 1);

    let error = client.current_by_zipcode("10001").await.unwrap_err();
    assert!(matches!(error, WeatherError::RequestFailed(_)));
}
