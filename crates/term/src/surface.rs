//! Terminal-backed [`Surface`].
//!
//! Tasks write into a [`FrameBuffer`]; `refresh` hands it to the
//! [`TerminalRenderer`]. Input is drained without blocking whenever the
//! scheduler refreshes or the ship asks for controls, and accumulates until
//! the ship reads it.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::core::Surface;
use crate::fb::FrameBuffer;
use crate::input::{collect_input, drain_events};
use crate::renderer::TerminalRenderer;
use crate::types::{Attr, Control};

pub struct TerminalSurface {
    fb: FrameBuffer,
    renderer: TerminalRenderer,
    pending: Control,
    quit: bool,
}

impl TerminalSurface {
    /// Size the framebuffer to the current terminal.
    pub fn new() -> Result<Self> {
        let (w, h) = crossterm::terminal::size()?;
        Ok(Self {
            fb: FrameBuffer::new(h, w),
            renderer: TerminalRenderer::new(),
            pending: Control::neutral(),
            quit: false,
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Enter the terminal, run `body`, and always restore the terminal.
    pub fn session<T>(&mut self, body: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        run_entered(self, Self::enter, Self::exit, body)
    }

    fn pump(&mut self) {
        let events = match drain_events() {
            Ok(events) => events,
            Err(err) => {
                warn!(error = %err, "failed to read terminal events");
                return;
            }
        };
        if events.is_empty() {
            return;
        }

        let input = collect_input(&events);
        self.pending.merge(input.control);
        if input.quit && !self.quit {
            info!("quit requested");
            self.quit = true;
        }
        if let Some((w, h)) = input.resized {
            self.relayout(h, w);
        }
    }

    fn relayout(&mut self, rows: u16, cols: u16) {
        debug!(rows, cols, "terminal resized");
        self.fb.relayout(rows, cols);
        self.renderer.invalidate();
    }
}

/// Run `body` between `enter` and `exit`.
///
/// `exit` runs even when `enter` fails partway, since raw mode may already
/// be on. An `exit` failure is logged; the first error is the one returned.
pub fn run_entered<S, T>(
    target: &mut S,
    enter: impl FnOnce(&mut S) -> Result<()>,
    exit: impl FnOnce(&mut S) -> Result<()>,
    body: impl FnOnce(&mut S) -> Result<T>,
) -> Result<T> {
    let result = enter(target).and_then(|()| body(target));
    if let Err(err) = exit(target) {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

impl Surface for TerminalSurface {
    fn dimensions(&self) -> (u16, u16) {
        (self.fb.rows(), self.fb.cols())
    }

    fn put_char(&mut self, row: i32, column: i32, ch: char, attr: Attr) {
        self.fb.put_char(row, column, ch, attr);
    }

    fn read_control(&mut self) -> Control {
        self.pump();
        std::mem::take(&mut self.pending)
    }

    fn signal_alert(&mut self) {
        self.renderer.bell();
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.renderer.set_cursor_visible(visible)
    }

    fn refresh(&mut self) -> Result<()> {
        self.pump();
        self.renderer.draw(&self.fb)
    }

    fn interrupted(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    #[derive(Default)]
    struct Session {
        log: Vec<&'static str>,
    }

    #[test]
    fn failed_enter_still_restores() {
        let mut session = Session::default();
        let result: Result<()> = run_entered(
            &mut session,
            |s| {
                s.log.push("enter");
                bail!("alternate screen unavailable")
            },
            |s| {
                s.log.push("exit");
                Ok(())
            },
            |s| {
                s.log.push("body");
                Ok(())
            },
        );

        assert!(result.is_err());
        assert_eq!(session.log, ["enter", "exit"]);
    }

    #[test]
    fn body_error_wins_over_exit_error() {
        let mut session = Session::default();
        let result: Result<u32> = run_entered(
            &mut session,
            |_| Ok(()),
            |s| {
                s.log.push("exit");
                bail!("restore failed")
            },
            |_| bail!("draw failed"),
        );

        assert_eq!(result.unwrap_err().to_string(), "draw failed");
        assert_eq!(session.log, ["exit"]);
    }

    #[test]
    fn body_value_is_returned_after_exit() {
        let mut session = Session::default();
        let value = run_entered(
            &mut session,
            |s| {
                s.log.push("enter");
                Ok(())
            },
            |s| {
                s.log.push("exit");
                Ok(())
            },
            |s| {
                s.log.push("body");
                Ok(7)
            },
        )
        .unwrap();

        assert_eq!(value, 7);
        assert_eq!(session.log, ["enter", "body", "exit"]);
    }
}
