//! In-memory surface for unit tests.

use std::collections::VecDeque;

use anyhow::Result;

use crate::surface::Surface;
use crate::types::{Attr, Control};

pub(crate) struct GridSurface {
    rows: u16,
    cols: u16,
    cells: Vec<(char, Attr)>,
    pub controls: VecDeque<Control>,
    pub alerts: usize,
    pub refreshes: usize,
    /// Every in-bounds write, in order.
    pub writes: Vec<(i32, i32, char, Attr)>,
    pub interrupt_after_refreshes: Option<usize>,
    /// Applied, blanking the grid, on the next `read_control`.
    pub resize_on_read: Option<(u16, u16)>,
}

impl GridSurface {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![(' ', Attr::Normal); rows as usize * cols as usize],
            controls: VecDeque::new(),
            alerts: 0,
            refreshes: 0,
            writes: Vec::new(),
            interrupt_after_refreshes: None,
            resize_on_read: None,
        }
    }

    pub fn cell(&self, row: i32, col: i32) -> Option<(char, Attr)> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn glyph(&self, row: i32, col: i32) -> char {
        self.cell(row, col).map_or(' ', |(ch, _)| ch)
    }

    pub fn visible_cells(&self) -> usize {
        self.cells.iter().filter(|(ch, _)| *ch != ' ').count()
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }
}

impl Surface for GridSurface {
    fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn put_char(&mut self, row: i32, column: i32, ch: char, attr: Attr) {
        if let Some(i) = self.index(row, column) {
            self.cells[i] = (ch, attr);
            self.writes.push((row, column, ch, attr));
        }
    }

    fn read_control(&mut self) -> Control {
        if let Some((rows, cols)) = self.resize_on_read.take() {
            self.rows = rows;
            self.cols = cols;
            self.cells = vec![(' ', Attr::Normal); rows as usize * cols as usize];
        }
        self.controls.pop_front().unwrap_or_default()
    }

    fn signal_alert(&mut self) {
        self.alerts += 1;
    }

    fn set_cursor_visible(&mut self, _visible: bool) -> Result<()> {
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        Ok(())
    }

    fn interrupted(&self) -> bool {
        self.interrupt_after_refreshes
            .is_some_and(|n| self.refreshes >= n)
    }
}

/// Run `f` against a fresh [`TicContext`] and hand back what it spawned.
pub(crate) fn with_ctx<R>(
    surface: &mut GridSurface,
    rng: &mut crate::rng::SimpleRng,
    f: impl FnOnce(&mut crate::task::TicContext<'_>) -> R,
) -> (R, Vec<crate::task::Task>) {
    let mut spawned = Vec::new();
    let out = {
        let mut ctx = crate::task::TicContext::new(surface, rng, &mut spawned);
        f(&mut ctx)
    };
    (out, spawned)
}
