//! Actions: user intents, async results, and timer expiries

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherSnapshot;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: (re)fetch weather for the current query city
    WeatherFetch,

    /// Result: fetch for `request_id` succeeded (after the reveal delay)
    WeatherDidLoad {
        request_id: u64,
        snapshot: WeatherSnapshot,
    },

    /// Result: fetch for `request_id` failed; `detail` is for logs and replays only
    WeatherDidError { request_id: u64, detail: String },

    // ===== Error category =====
    /// Timer: the error banner with this id has been shown long enough
    ErrorExpire(u64),

    /// Dismiss the error banner now
    ErrorDismiss,

    // ===== Search category =====
    /// Open city search overlay
    SearchOpen,

    /// Close search overlay (cancel)
    SearchClose,

    /// Search box text changed
    SearchInput(String),

    /// Submit the search box (explicit trigger)
    SearchSubmit(String),

    /// Timer: the empty-submission shake with this id is over
    SearchShakeEnd(u64),

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for loading animation
    Tick,

    /// Exit the application
    Quit,
}
