//! Framebuffer of glyph cells.
//!
//! Tasks write into the framebuffer between flushes; it is the only place the
//! current screen contents live.

use crate::core::border_cells;
use crate::types::Attr;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attr: Attr,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        attr: Attr::Normal,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// 2D framebuffer of cells, addressed `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(rows: u16, cols: u16) -> Self {
        let len = (rows as usize) * (cols as usize);
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Resize, keeping the overlapping top-left region in place.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        if self.rows == rows && self.cols == cols {
            return;
        }
        let mut next = FrameBuffer::new(rows, cols);
        for row in 0..self.rows.min(rows) {
            for col in 0..self.cols.min(cols) {
                if let Some(cell) = self.get(row, col) {
                    next.set(row, col, cell);
                }
            }
        }
        *self = next;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, row: u16, col: u16) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row as usize) * (self.cols as usize) + (col as usize))
    }

    pub fn get(&self, row: u16, col: u16) -> Option<Cell> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: u16, col: u16, cell: Cell) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = cell;
        }
    }

    /// Resize to a new terminal size and move the border to the new edge.
    ///
    /// The old border is blanked first so no stray edge survives inside the
    /// grown area; everything else in the overlap is kept.
    pub fn relayout(&mut self, rows: u16, cols: u16) {
        for (row, col, _) in border_cells(self.rows, self.cols) {
            self.put_char(row, col, ' ', Attr::Normal);
        }
        self.resize(rows, cols);
        for (row, col, ch) in border_cells(rows, cols) {
            self.put_char(row, col, ch, Attr::Normal);
        }
    }

    /// Signed write; anything off the grid is dropped.
    pub fn put_char(&mut self, row: i32, col: i32, ch: char, attr: Attr) {
        let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
            return;
        };
        self.set(row, col, Cell { ch, attr });
    }

    /// Row contents as a string, for tests and debugging.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .map(|col| self.get(row, col).unwrap_or_default().ch)
            .collect()
    }
}
