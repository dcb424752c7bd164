//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// City looked up when no `--city` is given.
pub const DEFAULT_CITY: &str = "Kratie";

/// Banner text shown for every failed fetch, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "City not found. Try again!";

/// Current conditions from weatherapi.com
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub name: String,
    pub country: String,
    pub temp_c: f32,
    pub condition: String,
    pub feelslike_c: f32,
    pub humidity: u8,
    pub vis_km: f32,
    pub wind_kph: f32,
}

/// Coarse phase of the latest fetch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Error banner text, tagged so an expiry timer only clears the error it was scheduled for
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TransientError {
    pub id: u64,
    pub message: String,
}

pub fn format_celsius(celsius: f32) -> String {
    format!("{:.1}°C", celsius)
}

/// Animation timing for the header gradient seam.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Controller state (visible in debug) ---
    /// City driving the active fetch
    #[debug(section = "Query", label = "City")]
    pub query_city: String,

    /// Generation of the latest fetch; results tagged with an older id are dropped
    #[debug(section = "Query", label = "Request")]
    pub request_id: u64,

    /// Idle → Loading → Loaded/Errored
    #[debug(section = "Weather", label = "State", debug_fmt)]
    pub load: LoadState,

    /// Last successfully fetched conditions, kept across failed fetches
    #[debug(section = "Weather", label = "Snapshot", debug_fmt)]
    pub snapshot: Option<WeatherSnapshot>,

    /// Error banner, cleared by its expiry timer
    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error: Option<TransientError>,

    #[debug(skip)]
    pub error_seq: u64,

    // --- Search (skipped) ---
    /// Whether the search overlay is open
    #[debug(skip)]
    pub search_mode: bool,

    /// Text typed into the search box, not yet submitted
    #[debug(skip)]
    pub input: String,

    /// Id of the running "empty submission" shake cue
    #[debug(skip)]
    pub shake: Option<u64>,

    #[debug(skip)]
    pub shake_seq: u64,

    // --- Animation internals (skipped) ---
    /// Animation frame counter (for gradient seam and shake)
    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to finish the current animation cycle after loading
    #[debug(skip)]
    pub loading_anim_ticks_remaining: u32,
}

impl AppState {
    /// Create state that will look up `city` first
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            query_city: city.into(),
            request_id: 0,
            load: LoadState::Idle,
            snapshot: None,
            error: None,
            error_seq: 0,
            search_mode: false,
            input: String::new(),
            shake: None,
            shake_seq: 0,
            tick_count: 0,
            loading_anim_ticks_remaining: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Snapshot is on screen but the latest fetch for `query_city` failed
    pub fn is_stale(&self) -> bool {
        self.load == LoadState::Errored && self.snapshot.is_some()
    }

    /// Name shown in the header: the snapshot's location once loaded, the query otherwise
    pub fn header_name(&self) -> String {
        match (&self.load, &self.snapshot) {
            (LoadState::Loading, _) | (_, None) => self.query_city.clone(),
            (_, Some(snapshot)) => snapshot.name.clone(),
        }
    }

    pub fn loading_anim_active(&self) -> bool {
        self.is_loading() || self.loading_anim_ticks_remaining > 0
    }

    /// Whether ticks should advance (loading gradient or shake cue running)
    pub fn animating(&self) -> bool {
        self.loading_anim_active() || self.shake.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}
