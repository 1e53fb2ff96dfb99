//! Terminal input module (scheduler-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events into [`crate::types::Control`] values and drains pending terminal
//! events without blocking, so the ship can read input once per tic.

pub mod map;
pub mod poll;

pub use tui_starfield_types as types;

pub use map::{control_for_key, should_quit};
pub use poll::{collect_input, drain_events, PolledInput, MAX_EVENTS_PER_TIC};
