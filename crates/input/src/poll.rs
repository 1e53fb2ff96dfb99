//! Non-blocking event drain.
//!
//! Terminal events queue up between tics. Each tic the surface drains what is
//! pending (bounded, allocation-free) and folds it into one [`PolledInput`].

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{control_for_key, should_quit};
use crate::types::Control;

/// Events read per drain; anything beyond waits for the next tic.
pub const MAX_EVENTS_PER_TIC: usize = 32;

/// Everything the player did since the last drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolledInput {
    pub control: Control,
    pub quit: bool,
    /// Latest terminal size as `(width, height)`, if it changed.
    pub resized: Option<(u16, u16)>,
}

/// Read all pending events without waiting.
pub fn drain_events() -> Result<ArrayVec<Event, MAX_EVENTS_PER_TIC>> {
    let mut events = ArrayVec::<Event, MAX_EVENTS_PER_TIC>::new();
    while !events.is_full() && event::poll(Duration::ZERO)? {
        events.push(event::read()?);
    }
    Ok(events)
}

/// Fold a batch of events into one input.
///
/// The last non-zero direction per axis wins and any fire press latches
/// `fire`. Key releases are ignored; auto-repeat counts as a press so a held
/// arrow keeps the ship moving.
pub fn collect_input(events: &[Event]) -> PolledInput {
    let mut input = PolledInput::default();
    for ev in events {
        match ev {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if should_quit(*key) {
                    input.quit = true;
                    continue;
                }
                if let Some(control) = control_for_key(*key) {
                    input.control.merge(control);
                }
            }
            Event::Resize(w, h) => input.resized = Some((*w, *h)),
            _ => {}
        }
    }
    input
}
