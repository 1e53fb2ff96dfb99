//! Headless [`Surface`] over a [`FrameBuffer`].
//!
//! Used for deterministic end-to-end runs: controls are scripted, alerts and
//! refreshes are counted, and nothing touches the real terminal.

use std::collections::VecDeque;

use anyhow::Result;

use crate::core::Surface;
use crate::fb::{Cell, FrameBuffer};
use crate::types::{Attr, Control};

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    fb: FrameBuffer,
    controls: VecDeque<Control>,
    alerts: usize,
    refreshes: usize,
    cursor_visible: bool,
    stop_after: Option<usize>,
    pending_resize: Option<(u16, u16)>,
}

impl HeadlessSurface {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            fb: FrameBuffer::new(rows, cols),
            controls: VecDeque::new(),
            alerts: 0,
            refreshes: 0,
            cursor_visible: true,
            stop_after: None,
            pending_resize: None,
        }
    }

    /// Report a quit request once `refreshes` refreshes have happened.
    pub fn stop_after(mut self, refreshes: usize) -> Self {
        self.stop_after = Some(refreshes);
        self
    }

    /// Queue input for a future `read_control`, one entry per read.
    pub fn push_control(&mut self, control: Control) {
        self.controls.push_back(control);
    }

    /// Resize the grid the next time controls are read, the way a terminal
    /// resize event arrives while input is being drained.
    pub fn resize_on_next_read(&mut self, rows: u16, cols: u16) {
        self.pending_resize = Some((rows, cols));
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn cell(&self, row: u16, col: u16) -> Option<Cell> {
        self.fb.get(row, col)
    }

    pub fn alerts(&self) -> usize {
        self.alerts
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }
}

impl Surface for HeadlessSurface {
    fn dimensions(&self) -> (u16, u16) {
        (self.fb.rows(), self.fb.cols())
    }

    fn put_char(&mut self, row: i32, column: i32, ch: char, attr: Attr) {
        self.fb.put_char(row, column, ch, attr);
    }

    fn read_control(&mut self) -> Control {
        if let Some((rows, cols)) = self.pending_resize.take() {
            self.fb.relayout(rows, cols);
        }
        self.controls.pop_front().unwrap_or_default()
    }

    fn signal_alert(&mut self) {
        self.alerts += 1;
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        Ok(())
    }

    fn interrupted(&self) -> bool {
        self.stop_after.is_some_and(|n| self.refreshes >= n)
    }
}
