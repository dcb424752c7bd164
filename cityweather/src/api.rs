//! weatherapi.com client

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::WeatherConfig;
use crate::state::WeatherSnapshot;

/// Public endpoint root; `current.json` is appended per request.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

// ============================================================================
// Response shape
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f32,
    condition: ApiCondition,
    feelslike_c: f32,
    humidity: u8,
    vis_km: f32,
    wind_kph: f32,
}

impl From<CurrentResponse> for WeatherSnapshot {
    fn from(data: CurrentResponse) -> Self {
        WeatherSnapshot {
            name: data.location.name,
            country: data.location.country,
            temp_c: data.current.temp_c,
            condition: data.current.condition.text,
            feelslike_c: data.current.feelslike_c,
            humidity: data.current.humidity,
            vis_km: data.current.vis_km,
            wind_kph: data.current.wind_kph,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Every way a lookup can fail. The UI shows one message for all of them.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("unexpected weather response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Longest slice of an error body kept for logs.
const ERROR_BODY_LIMIT: usize = 200;

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

// ============================================================================
// Client
// ============================================================================

/// Cheap to clone; each fetch task takes its own copy.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    fn current_url(&self, city: &str) -> String {
        format!(
            "{}/current.json?key={}&q={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(city)
        )
    }

    /// Fetch current conditions for `city`
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        tracing::debug!(city, "requesting current weather");

        let response = self.http.get(self.current_url(city)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let data: CurrentResponse = serde_json::from_str(&body)?;
        Ok(data.into())
    }
}
