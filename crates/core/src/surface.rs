//! The drawing and input surface tasks run against.
//!
//! Coordinates are `(row, column)` in cells, origin top-left. Writes outside
//! the grid are dropped by the implementation, so callers never check bounds
//! before drawing.

use anyhow::Result;

use crate::types::{Attr, Control};

pub trait Surface {
    /// Grid size as `(rows, columns)`.
    fn dimensions(&self) -> (u16, u16);

    /// Write one glyph. Out-of-grid coordinates are a no-op.
    fn put_char(&mut self, row: i32, column: i32, ch: char, attr: Attr);

    /// Pending player input. Never blocks; returns [`Control::neutral`] when
    /// nothing was pressed.
    fn read_control(&mut self) -> Control;

    /// Fire-and-forget audible cue.
    fn signal_alert(&mut self);

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;

    /// Flush everything written since the last refresh to the screen.
    fn refresh(&mut self) -> Result<()>;

    /// True once the user asked to leave. Checked by the scheduler between tics.
    fn interrupted(&self) -> bool {
        false
    }
}
