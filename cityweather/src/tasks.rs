//! Async bodies for effects. Each resolves to the action it reports back.
//!
//! The binary spawns these on keyed tui-dispatch tasks, so a newer spawn under
//! the same key aborts the older one; the reducer's id checks cover results
//! that were already in the queue.

use std::time::Duration;

use crate::action::Action;
use crate::api::WeatherClient;

/// Task key for the in-flight weather lookup
pub const WEATHER_TASK: &str = "weather";
/// Task key for the error banner timer
pub const ERROR_CLEAR_TASK: &str = "error_clear";
/// Task key for the search box shake timer
pub const SHAKE_TASK: &str = "shake";

/// Look up `city`. Successes are held back by `reveal_delay`; failures report at once.
pub async fn fetch_weather(
    client: WeatherClient,
    request_id: u64,
    city: String,
    reveal_delay: Duration,
) -> Action {
    match client.fetch_current(&city).await {
        Ok(snapshot) => {
            tracing::info!(request_id, city = %city, name = %snapshot.name, "weather loaded");
            tokio::time::sleep(reveal_delay).await;
            Action::WeatherDidLoad {
                request_id,
                snapshot,
            }
        }
        Err(error) => {
            tracing::warn!(request_id, city = %city, %error, "weather lookup failed");
            Action::WeatherDidError {
                request_id,
                detail: error.to_string(),
            }
        }
    }
}

/// Report that the error banner `id` has been shown for `after`
pub async fn expire_error(id: u64, after: Duration) -> Action {
    tokio::time::sleep(after).await;
    Action::ErrorExpire(id)
}

/// Report that the shake cue `id` is over
pub async fn end_shake(id: u64, after: Duration) -> Action {
    tokio::time::sleep(after).await;
    Action::SearchShakeEnd(id)
}
