//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scheduler, tasks, terminal rendering, tests).
//!
//! # Animation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BORDER_SIZE` | 1 | Width of the frame drawn around the grid |
//! | `TIC_MS` | 100 | Scheduler pacing interval |
//! | `MAX_STARS` | 150 | Star blinkers created at startup |
//! | `SHIP_SPEED` | 10 | Cells moved per control step |
//!
//! # Blink Timing
//!
//! A star holds each render state for a fixed number of tics:
//!
//! | State | Tics |
//! |-------|------|
//! | dim | 20 |
//! | normal | 3 |
//! | bold | 5 |
//! | normal | 3 |
//!
//! Each cycle starts with a random delay in `BLINK_DELAY_MIN..=BLINK_DELAY_MAX`.
//!
//! # Examples
//!
//! ```
//! use tui_starfield_types::{Attr, Control, Position, TIC_MS};
//!
//! let pos = Position::new(4.6, 10.2);
//! assert_eq!(pos.cell(), (5, 10));
//!
//! let control = Control::new(-1, 0, true);
//! assert!(control.fire);
//!
//! assert_eq!(Attr::default(), Attr::Normal);
//! assert_eq!(TIC_MS, 100);
//! ```

/// Border thickness in cells.
pub const BORDER_SIZE: u16 = 1;

/// Scheduler pacing interval in milliseconds.
pub const TIC_MS: u64 = 100;

/// Number of star blinkers scattered at startup.
pub const MAX_STARS: usize = 150;

/// Ship displacement per control step, in cells.
pub const SHIP_SPEED: f64 = 10.0;

/// Glyphs a star may be drawn with.
pub const STAR_GLYPHS: &str = "+*.:";

/// Smallest random delay before a blink cycle.
pub const BLINK_DELAY_MIN: u32 = 1;

/// Largest random delay before a blink cycle.
pub const BLINK_DELAY_MAX: u32 = 5;

/// Tics a star stays dimmed.
pub const BLINK_DIM_TICS: u32 = 20;

/// Tics a star stays normal after dimming.
pub const BLINK_RISE_TICS: u32 = 3;

/// Tics a star stays bold.
pub const BLINK_BOLD_TICS: u32 = 5;

/// Tics a star stays normal after the bold peak.
pub const BLINK_FALL_TICS: u32 = 3;

/// Default projectile row speed (cells per tic, negative is up).
pub const PROJECTILE_ROW_SPEED: f64 = -0.3;

/// Default projectile column speed.
pub const PROJECTILE_COLUMN_SPEED: f64 = 0.0;

/// Glyph drawn on the first tic of a shot.
pub const MUZZLE_FLASH_GLYPH: char = '*';

/// Glyph drawn on the second tic of a shot.
pub const SHELL_GLYPH: char = 'O';

/// Travel glyph for shots with horizontal drift.
pub const TRACER_HORIZONTAL: char = '-';

/// Travel glyph for purely vertical shots.
pub const TRACER_VERTICAL: char = '|';

/// Render attribute of a single glyph cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attr {
    #[default]
    Normal,
    Dim,
    Bold,
}

/// Real-valued grid position.
///
/// Velocities accumulate in fractional space; the position only snaps to a
/// cell when it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub row: f64,
    pub column: f64,
}

impl Position {
    pub const fn new(row: f64, column: f64) -> Self {
        Self { row, column }
    }

    /// Nearest cell, rounding half away from zero.
    pub fn cell(&self) -> (i32, i32) {
        (self.row.round() as i32, self.column.round() as i32)
    }

    pub fn offset(&self, row_delta: f64, column_delta: f64) -> Self {
        Self {
            row: self.row + row_delta,
            column: self.column + column_delta,
        }
    }
}

/// Normalized player input for one tic.
///
/// Deltas are always in `-1..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Control {
    pub row_delta: i8,
    pub col_delta: i8,
    pub fire: bool,
}

impl Control {
    /// Build a control, clamping deltas into `-1..=1`.
    pub fn new(row_delta: i8, col_delta: i8, fire: bool) -> Self {
        Self {
            row_delta: row_delta.clamp(-1, 1),
            col_delta: col_delta.clamp(-1, 1),
            fire,
        }
    }

    /// No movement, no fire.
    pub const fn neutral() -> Self {
        Self {
            row_delta: 0,
            col_delta: 0,
            fire: false,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    /// Fold a later input into this one: non-zero deltas override, fire latches.
    pub fn merge(&mut self, later: Control) {
        if later.row_delta != 0 {
            self.row_delta = later.row_delta;
        }
        if later.col_delta != 0 {
            self.col_delta = later.col_delta;
        }
        self.fire |= later.fire;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blink_timing_defaults() {
        assert_eq!(BLINK_DIM_TICS, 20);
        assert_eq!(BLINK_RISE_TICS, 3);
        assert_eq!(BLINK_BOLD_TICS, 5);
        assert_eq!(BLINK_FALL_TICS, 3);
        assert_eq!((BLINK_DELAY_MIN, BLINK_DELAY_MAX), (1, 5));
    }

    #[test]
    fn position_rounds_only_at_cell_lookup() {
        let mut pos = Position::new(10.0, 3.0);
        for _ in 0..3 {
            pos = pos.offset(-0.3, 0.0);
        }
        assert!((pos.row - 9.1).abs() < 1e-9);
        assert_eq!(pos.cell(), (9, 3));
    }

    #[test]
    fn control_new_clamps_deltas() {
        let c = Control::new(5, -7, false);
        assert_eq!((c.row_delta, c.col_delta), (1, -1));
    }

    #[test]
    fn control_merge_keeps_last_direction_and_latches_fire() {
        let mut c = Control::new(-1, 0, true);
        c.merge(Control::new(0, 1, false));
        assert_eq!(c, Control::new(-1, 1, true));

        c.merge(Control::new(1, 0, false));
        assert_eq!(c.row_delta, 1);
        assert!(c.fire);
    }
}
