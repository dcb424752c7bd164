//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{
    AppState, FETCH_FAILED_MESSAGE, LOADING_ANIM_CYCLE_TICKS, LoadState, TransientError,
};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherFetch => begin_fetch(state),

        Action::WeatherDidLoad {
            request_id,
            snapshot,
        } => {
            if request_id != state.request_id {
                return DispatchResult::unchanged();
            }
            state.snapshot = Some(snapshot);
            state.load = LoadState::Loaded;
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        Action::WeatherDidError { request_id, .. } => {
            if request_id != state.request_id {
                return DispatchResult::unchanged();
            }
            state.load = LoadState::Errored;
            state.error_seq = state.error_seq.wrapping_add(1);
            let id = state.error_seq;
            state.error = Some(TransientError {
                id,
                message: FETCH_FAILED_MESSAGE.to_string(),
            });
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed_with(Effect::ExpireError { id })
        }

        // ===== Error actions =====
        Action::ErrorExpire(id) => match &state.error {
            Some(error) if error.id == id => {
                state.error = None;
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        },

        Action::ErrorDismiss => {
            if state.error.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Search actions =====
        Action::SearchOpen => {
            state.search_mode = true;
            state.input.clear();
            state.shake = None;
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.search_mode = false;
            state.input.clear();
            state.shake = None;
            DispatchResult::changed()
        }

        Action::SearchInput(text) => {
            state.input = text;
            DispatchResult::changed()
        }

        Action::SearchSubmit(raw) => {
            let city = raw.trim();
            if city.is_empty() {
                state.shake_seq = state.shake_seq.wrapping_add(1);
                let id = state.shake_seq;
                state.shake = Some(id);
                return DispatchResult::changed_with(Effect::EndShake { id });
            }

            state.query_city = city.to_string();
            state.input.clear();
            state.search_mode = false;
            state.shake = None;
            begin_fetch(state)
        }

        Action::SearchShakeEnd(id) => {
            if state.shake == Some(id) {
                state.shake = None;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.animating() {
                state.tick_count = state.tick_count.wrapping_add(1);
                if !state.is_loading() && state.loading_anim_ticks_remaining > 0 {
                    state.loading_anim_ticks_remaining -= 1;
                }
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Start a fetch cycle for `state.query_city`, superseding any fetch in flight.
fn begin_fetch(state: &mut AppState) -> DispatchResult<Effect> {
    state.request_id = state.request_id.wrapping_add(1);
    state.load = LoadState::Loading;
    state.error = None;
    state.tick_count = 0;
    state.loading_anim_ticks_remaining = 0;
    DispatchResult::changed_with(Effect::FetchWeather {
        request_id: state.request_id,
        city: state.query_city.clone(),
    })
}

fn ticks_to_phase_zero(tick_count: u32) -> u32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    if tick_count == 0 {
        return cycle;
    }
    let remainder = tick_count % cycle;
    if remainder == 0 { 0 } else { cycle - remainder }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherSnapshot;
    use pretty_assertions::assert_eq;

    fn snapshot(name: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            name: name.into(),
            country: "Cambodia".into(),
            temp_c: 30.0,
            condition: "Clear".into(),
            feelslike_c: 33.0,
            humidity: 55,
            vis_km: 10.0,
            wind_kph: 12.0,
        }
    }

    #[test]
    fn test_weather_fetch_sets_loading() {
        let mut state = AppState::default();
        assert_eq!(state.load, LoadState::Idle);
        state.tick_count = 5;
        state.loading_anim_ticks_remaining = 7;

        let result = reducer(&mut state, Action::WeatherFetch);

        assert!(result.changed);
        assert!(state.is_loading());
        assert_eq!(state.request_id, 1);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.loading_anim_ticks_remaining, 0);
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request_id: 1,
                city: "Kratie".into(),
            }]
        );
    }

    #[test]
    fn test_fetch_clears_previous_error() {
        let mut state = AppState {
            error: Some(TransientError {
                id: 3,
                message: FETCH_FAILED_MESSAGE.into(),
            }),
            ..Default::default()
        };

        reducer(&mut state, Action::WeatherFetch);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_weather_did_load_replaces_snapshot() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WeatherFetch);
        state.tick_count = 1;

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request_id: 1,
                snapshot: snapshot("Kratie"),
            },
        );

        assert!(result.changed);
        assert_eq!(state.load, LoadState::Loaded);
        assert_eq!(state.snapshot, Some(snapshot("Kratie")));
        assert_eq!(
            state.loading_anim_ticks_remaining,
            LOADING_ANIM_CYCLE_TICKS - 1
        );
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchSubmit("Phnom Penh".into()));
        reducer(&mut state, Action::SearchSubmit("Siem Reap".into()));
        assert_eq!(state.request_id, 2);

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request_id: 1,
                snapshot: snapshot("Phnom Penh"),
            },
        );

        assert!(!result.changed);
        assert!(state.is_loading());
        assert!(state.snapshot.is_none());
    }

    #[test]
    fn test_weather_did_error_keeps_snapshot_and_schedules_clear() {
        let mut state = AppState {
            snapshot: Some(snapshot("Kratie")),
            load: LoadState::Loaded,
            ..Default::default()
        };
        reducer(&mut state, Action::SearchSubmit("Nowhere12345".into()));
        let request_id = state.request_id;

        let result = reducer(
            &mut state,
            Action::WeatherDidError {
                request_id,
                detail: "400 Bad Request".into(),
            },
        );

        assert!(result.changed);
        assert_eq!(state.load, LoadState::Errored);
        assert_eq!(state.error_message(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(state.snapshot, Some(snapshot("Kratie")));
        assert_eq!(result.effects, vec![Effect::ExpireError { id: 1 }]);
    }

    #[test]
    fn test_stale_error_is_ignored() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WeatherFetch);
        reducer(&mut state, Action::WeatherFetch);

        let result = reducer(
            &mut state,
            Action::WeatherDidError {
                request_id: 1,
                detail: "timeout".into(),
            },
        );

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert!(state.error.is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_old_expiry_does_not_clear_newer_error() {
        let mut state = AppState::default();
        for _ in 0..2 {
            reducer(&mut state, Action::WeatherFetch);
            let request_id = state.request_id;
            reducer(
                &mut state,
                Action::WeatherDidError {
                    request_id,
                    detail: String::new(),
                },
            );
        }
        assert_eq!(state.error.as_ref().map(|e| e.id), Some(2));

        let result = reducer(&mut state, Action::ErrorExpire(1));
        assert!(!result.changed);
        assert!(state.error.is_some());

        let result = reducer(&mut state, Action::ErrorExpire(2));
        assert!(result.changed);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_error_dismiss() {
        let mut state = AppState {
            error: Some(TransientError {
                id: 1,
                message: FETCH_FAILED_MESSAGE.into(),
            }),
            ..Default::default()
        };

        assert!(reducer(&mut state, Action::ErrorDismiss).changed);
        assert!(state.error.is_none());
        assert!(!reducer(&mut state, Action::ErrorDismiss).changed);
    }

    #[test]
    fn test_submit_trims_and_starts_fetch() {
        let mut state = AppState {
            search_mode: true,
            input: "  Phnom Penh ".into(),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::SearchSubmit("  Phnom Penh ".into()));

        assert_eq!(state.query_city, "Phnom Penh");
        assert!(state.input.is_empty());
        assert!(!state.search_mode);
        assert!(state.is_loading());
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request_id: 1,
                city: "Phnom Penh".into(),
            }]
        );
    }

    #[test]
    fn test_blank_submit_shakes_without_state_change() {
        for raw in ["", "   "] {
            let mut state = AppState {
                search_mode: true,
                input: raw.into(),
                ..Default::default()
            };

            let result = reducer(&mut state, Action::SearchSubmit(raw.into()));

            assert_eq!(state.query_city, "Kratie");
            assert_eq!(state.input, raw);
            assert!(state.search_mode);
            assert_eq!(state.load, LoadState::Idle);
            assert_eq!(state.request_id, 0);
            assert_eq!(state.shake, Some(1));
            assert_eq!(result.effects, vec![Effect::EndShake { id: 1 }]);
        }
    }

    #[test]
    fn test_shake_end_only_for_current_shake() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchSubmit(String::new()));
        reducer(&mut state, Action::SearchSubmit(String::new()));
        assert_eq!(state.shake, Some(2));

        assert!(!reducer(&mut state, Action::SearchShakeEnd(1)).changed);
        assert_eq!(state.shake, Some(2));
        assert!(reducer(&mut state, Action::SearchShakeEnd(2)).changed);
        assert_eq!(state.shake, None);
    }

    #[test]
    fn test_resubmitting_same_city_restarts_cycle() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchSubmit("Kratie".into()));
        reducer(
            &mut state,
            Action::WeatherDidLoad {
                request_id: 1,
                snapshot: snapshot("Kratie"),
            },
        );

        let result = reducer(&mut state, Action::SearchSubmit("Kratie".into()));

        assert!(state.is_loading());
        assert_eq!(state.request_id, 2);
        assert_eq!(result.effects.len(), 1);
    }

    #[test]
    fn test_search_close_discards_input() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchOpen);
        reducer(&mut state, Action::SearchInput("Batt".into()));
        assert_eq!(state.input, "Batt");

        reducer(&mut state, Action::SearchClose);
        assert!(!state.search_mode);
        assert!(state.input.is_empty());
        assert_eq!(state.query_city, "Kratie");
    }

    #[test]
    fn test_tick_rerenders_during_animation() {
        let mut state = AppState::default();

        // Idle and nothing to finish - no re-render
        let result = reducer(&mut state, Action::Tick);
        assert!(!result.changed);

        // Remaining animation ticks - should re-render
        state.loading_anim_ticks_remaining = 1;
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
        assert_eq!(state.loading_anim_ticks_remaining, 0);

        // Loading - should re-render even without remaining ticks
        state.load = LoadState::Loading;
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);

        // Shaking - should re-render
        state.load = LoadState::Idle;
        state.shake = Some(1);
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
    }
}
