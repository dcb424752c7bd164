//! City weather TUI
//!
//! The controller (state, actions, reducer, effects) and the provider client
//! live here so they can be tested without a terminal; `main.rs` wires them
//! to the tui-dispatch runtime.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod icons;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod tasks;
