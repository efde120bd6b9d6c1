//! WeatherAPI.com client and result types.
//!
//! The client issues a single GET to the provider's current-conditions
//! endpoint and normalizes the outcome into either a [`WeatherReport`] or a
//! [`WeatherError`]. Callers always receive one of the two; nothing in this
//! module panics or propagates an unstructured failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::core::config::{CredentialsConfig, WeatherConfig};

/// Errors a weather lookup can report.
///
/// The taxonomy is closed: configuration absence, transport failure, and a
/// decoded response missing an expected field. Each maps to a stable
/// `error_kind` name in the failure payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// No API key was configured; no network call was attempted.
    #[error("WEATHER_API_KEY not found in environment variables")]
    MissingCredential,

    /// The outbound request failed: connection error, timeout, non-2xx
    /// status, or an undecodable body. Single-shot, no retry.
    #[error("{0}")]
    RequestFailed(String),

    /// The response decoded but lacked an expected field (or carried it
    /// with the wrong JSON type).
    #[error("Missing key: {0}")]
    MalformedResponse(String),
}

impl WeatherError {
    /// Stable kind name surfaced in the failure payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "MissingCredential",
            Self::RequestFailed(_) => "RequestFailed",
            Self::MalformedResponse(_) => "MalformedResponse",
        }
    }
}

/// Failure payload surfaced to callers in place of a report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WeatherFailure {
    /// One of "MissingCredential", "RequestFailed", "MalformedResponse".
    pub error_kind: String,
    /// Human-readable detail, preserving the underlying error text.
    pub message: String,
}

impl From<&WeatherError> for WeatherFailure {
    fn from(error: &WeatherError) -> Self {
        Self {
            error_kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

/// Normalized current-conditions snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    /// Composed "<name>, <region>" location string.
    pub location: String,
    /// The zip code the caller asked about, echoed back.
    pub zipcode: String,
    pub temperature_f: f64,
    pub temperature_c: f64,
    /// Condition text, e.g. "Sunny".
    pub condition: String,
    /// Relative humidity percentage.
    pub humidity: u8,
    pub wind_mph: f64,
    pub feels_like_f: f64,
    /// Provider-supplied timestamp, passed through as an opaque string.
    pub last_updated: String,
}

/// Client for the WeatherAPI.com current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl WeatherClient {
    /// Create a client from the server configuration.
    pub fn new(weather: &WeatherConfig, credentials: &CredentialsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: weather.api_url.clone(),
            api_key: credentials.weather_api_key.clone(),
            timeout: Duration::from_secs(weather.timeout_secs),
        }
    }

    /// Look up current conditions for a US zip code.
    ///
    /// Single-shot and fail-fast: one timeout-bounded GET, no retries. The
    /// credential is checked before any network activity, so a missing key
    /// never produces an outbound call.
    pub async fn current_by_zipcode(&self, zipcode: &str) -> Result<WeatherReport, WeatherError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingCredential)?;

        debug!("Requesting current conditions for zip code {}", zipcode);

        let response = self
            .http
            .get(&self.api_url)
            .timeout(self.timeout)
            .query(&[("key", api_key), ("q", zipcode), ("aqi", "no")])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        parse_report(zipcode, &body)
    }
}

/// Extract the normalized report from a decoded provider response.
///
/// The first missing (or wrong-typed) key aborts the extraction and is
/// reported by name.
pub fn parse_report(zipcode: &str, body: &Value) -> Result<WeatherReport, WeatherError> {
    let location = field(body, "location")?;
    let current = field(body, "current")?;
    let condition = field(current, "condition")?;

    Ok(WeatherReport {
        location: format!(
            "{}, {}",
            str_field(location, "name")?,
            str_field(location, "region")?
        ),
        zipcode: zipcode.to_string(),
        temperature_f: num_field(current, "temp_f")?,
        temperature_c: num_field(current, "temp_c")?,
        condition: str_field(condition, "text")?.to_string(),
        humidity: percent_field(current, "humidity")?,
        wind_mph: num_field(current, "wind_mph")?,
        feels_like_f: num_field(current, "feelslike_f")?,
        last_updated: str_field(current, "last_updated")?.to_string(),
    })
}

fn field<'a>(value: &'a Value, key: &str) -> Result<&'a Value, WeatherError> {
    value
        .get(key)
        .ok_or_else(|| WeatherError::MalformedResponse(key.to_string()))
}

fn str_field<'a>(value: &'a Value, key: &str) -> Result<&'a str, WeatherError> {
    field(value, key)?
        .as_str()
        .ok_or_else(|| WeatherError::MalformedResponse(key.to_string()))
}

fn num_field(value: &Value, key: &str) -> Result<f64, WeatherError> {
    field(value, key)?
        .as_f64()
        .ok_or_else(|| WeatherError::MalformedResponse(key.to_string()))
}

fn percent_field(value: &Value, key: &str) -> Result<u8, WeatherError> {
    field(value, key)?
        .as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| WeatherError::MalformedResponse(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> Value {
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

    fn test_client(api_key: Option<&str>, api_url: &str) -> WeatherClient {
        let weather = WeatherConfig {
            api_url: api_url.to_string(),
            timeout_secs: 5,
        };
        let credentials = CredentialsConfig {
            weather_api_key: api_key.map(String::from),
        };
        WeatherClient::new(&weather, &credentials)
    }

    #[test]
    fn test_parse_well_formed_response() {
        let report = parse_report("10001", &sample_body()).unwrap();
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

    #[test]
    fn test_missing_condition_is_reported_by_name() {
        let mut body = sample_body();
        body["current"]
            .as_object_mut()
            .unwrap()
            .remove("condition");
        let error = parse_report("10001", &body).unwrap_err();
        assert_eq!(error, WeatherError::MalformedResponse("condition".into()));
        assert_eq!(error.to_string(), "Missing key: condition");
    }

    #[test]
    fn test_missing_location_is_reported_by_name() {
        let mut body = sample_body();
        body.as_object_mut().unwrap().remove("location");
        let error = parse_report("10001", &body).unwrap_err();
        assert_eq!(error.to_string(), "Missing key: location");
    }

    #[test]
    fn test_wrong_typed_field_is_reported_by_name() {
        let mut body = sample_body();
        body["current"]["temp_f"] = Value::String("warm".to_string());
        let error = parse_report("10001", &body).unwrap_err();
        assert_eq!(error.to_string(), "Missing key: temp_f");
    }

    #[test]
    fn test_error_kinds_are_stable() {
        assert_eq!(WeatherError::MissingCredential.kind(), "MissingCredential");
        assert_eq!(
            WeatherError::RequestFailed("x".into()).kind(),
            "RequestFailed"
        );
        assert_eq!(
            WeatherError::MalformedResponse("x".into()).kind(),
            "MalformedResponse"
        );
    }

    #[test]
    fn test_missing_credential_message_names_the_variable() {
        assert_eq!(
            WeatherError::MissingCredential.to_string(),
            "WEATHER_API_KEY not found in environment variables"
        );
    }

    #[tokio::test]
    async fn test_missing_credential_skips_the_network() {
        // The base URL is unroutable; a MissingCredential (not RequestFailed)
        // outcome proves no call was attempted.
        let client = test_client(None, "http://127.0.0.1:9/current.json");
        let error = client.current_by_zipcode("10001").await.unwrap_err();
        assert_eq!(error, WeatherError::MissingCredential);
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_failed() {
        let client = test_client(Some("key"), "http://127.0.0.1:9/current.json");
        let error = client.current_by_zipcode("10001").await.unwrap_err();
        match error {
            WeatherError::RequestFailed(message) => assert!(!message.is_empty()),
            other => panic!("Expected RequestFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_payload_from_error() {
        let failure = WeatherFailure::from(&WeatherError::MalformedResponse("humidity".into()));
        assert_eq!(failure.error_kind, "MalformedResponse");
        assert_eq!(failure.message, "Missing key: humidity");
    }
}
