//! Runtime configuration: provider credential, endpoint, and timings

use std::time::Duration;

use crate::state::DEFAULT_CITY;

/// Environment variable the API key is read from.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Hold a successful result back this long so fast responses don't flicker.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1200);
/// How long the error banner stays up.
pub const DEFAULT_ERROR_TIMEOUT: Duration = Duration::from_secs(2);
/// Length of the search box shake after an empty submission.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing weather API key: pass --api-key or set {}", API_KEY_ENV)]
    MissingApiKey,
    #[error("invalid base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),
}

/// Validated settings the effect handler needs
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_city: String,
    pub reveal_delay: Duration,
    pub error_timeout: Duration,
    pub shake_duration: Duration,
}

impl WeatherConfig {
    /// Build a config from raw CLI/env values.
    pub fn new(api_key: Option<String>, base_url: String) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            api_key,
            base_url,
            default_city: DEFAULT_CITY.to_string(),
            reveal_delay: DEFAULT_REVEAL_DELAY,
            error_timeout: DEFAULT_ERROR_TIMEOUT,
            shake_duration: SHAKE_DURATION,
        })
    }

    /// Startup city; blank input keeps [`DEFAULT_CITY`] so the first fetch never sends `q=`
    pub fn with_default_city(mut self, city: &str) -> Self {
        let city = city.trim();
        if !city.is_empty() {
            self.default_city = city.to_string();
        }
        self
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    pub fn with_error_timeout(mut self, timeout: Duration) -> Self {
        self.error_timeout = timeout;
        self
    }
}
