//! Sprite renderer: draws frames and the grid border onto a [`Surface`].

use crate::frame::Frame;
use crate::surface::Surface;
use crate::types::{Attr, Position};

/// Draw `frame` with its top-left corner at `at`.
///
/// Spaces in the frame are transparent. With `erase` set, every glyph the
/// frame would draw is overwritten with a blank instead, so a frame can be
/// removed without knowing what was under it. Cells outside the grid are
/// skipped.
pub fn draw_frame(surface: &mut dyn Surface, at: Position, frame: &Frame, erase: bool) {
    let (rows, cols) = surface.dimensions();
    let (top, left) = at.cell();

    for (dy, line) in frame.lines().enumerate() {
        let row = top + dy as i32;
        if row < 0 {
            continue;
        }
        if row >= rows as i32 {
            break;
        }

        for (dx, &ch) in line.iter().enumerate() {
            let col = left + dx as i32;
            if col < 0 {
                continue;
            }
            if col >= cols as i32 {
                break;
            }
            if ch == ' ' {
                continue;
            }
            let glyph = if erase { ' ' } else { ch };
            surface.put_char(row, col, glyph, Attr::Normal);
        }
    }
}

/// Cells of a single-line box around a `rows` x `cols` grid, with their glyphs.
///
/// Grids smaller than 2x2 have no room for a border and yield nothing.
pub fn border_cells(rows: u16, cols: u16) -> Vec<(i32, i32, char)> {
    if rows < 2 || cols < 2 {
        return Vec::new();
    }
    let bottom = rows as i32 - 1;
    let right = cols as i32 - 1;

    let mut cells = Vec::with_capacity(2 * (rows as usize + cols as usize));
    for col in 1..right {
        cells.push((0, col, '─'));
        cells.push((bottom, col, '─'));
    }
    for row in 1..bottom {
        cells.push((row, 0, '│'));
        cells.push((row, right, '│'));
    }
    cells.push((0, 0, '┌'));
    cells.push((0, right, '┐'));
    cells.push((bottom, 0, '└'));
    cells.push((bottom, right, '┘'));
    cells
}

/// Draw a single-line box around the whole grid.
pub fn draw_border(surface: &mut dyn Surface) {
    let (rows, cols) = surface.dimensions();
    for (row, col, ch) in border_cells(rows, cols) {
        surface.put_char(row, col, ch, Attr::Normal);
    }
}
