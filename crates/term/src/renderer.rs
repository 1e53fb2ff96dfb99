//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The renderer keeps a copy of what is on screen and only emits changed
//! runs, so a tic where a handful of stars blink costs a handful of cursor
//! moves.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::types::Attr;

const BELL: &str = "\x07";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    bell_pending: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            bell_pending: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.buf.clear();
        if visible {
            self.buf.queue(cursor::Show)?;
        } else {
            self.buf.queue(cursor::Hide)?;
        }
        self.flush_buf()
    }

    /// Ring the terminal bell with the next draw.
    pub fn bell(&mut self) {
        self.bell_pending = true;
    }

    /// Draw a framebuffer, diffing against the previous draw.
    ///
    /// The first draw, and the first after [`invalidate`](Self::invalidate) or
    /// a size change, is a full redraw.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.as_mut() {
            Some(prev) if prev.rows() == fb.rows() && prev.cols() == fb.cols() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        if std::mem::take(&mut self.bell_pending) {
            self.buf.queue(Print(BELL))?;
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<Attr> = None;
    for row in 0..fb.rows() {
        for col in 0..fb.cols() {
            let cell = fb.get(row, col).unwrap_or_default();
            if current != Some(cell.attr) {
                apply_attr_into(out, cell.attr)?;
                current = Some(cell.attr);
            }
            out.queue(Print(cell.ch))?;
        }
        if row + 1 < fb.rows() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Attr> = None;
    let mut any = false;

    for_each_changed_run(prev, next, |row, col, len| {
        any = true;
        out.queue(cursor::MoveTo(col, row))?;
        for dx in 0..len {
            let cell = next.get(row, col + dx).unwrap_or_default();
            if current != Some(cell.attr) {
                apply_attr_into(out, cell.attr)?;
                current = Some(cell.attr);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    if any {
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_attr_into(out: &mut Vec<u8>, attr: Attr) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match attr {
        Attr::Normal => {}
        Attr::Dim => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Attr::Bold => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
    }
    Ok(())
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.rows() != next.rows() || prev.cols() != next.cols() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for row in 0..next.rows() {
            f(row, 0, next.cols())?;
        }
        return Ok(());
    }

    let w = next.cols();
    let h = next.rows();

    for row in 0..h {
        let mut col = 0;
        while col < w {
            if prev.get(row, col) == next.get(row, col) {
                col += 1;
                continue;
            }

            let start = col;
            col += 1;
            while col < w && prev.get(row, col) != next.get(row, col) {
                col += 1;
            }
            f(row, start, col - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = FrameBuffer::new(1, 5);
        let mut b = FrameBuffer::new(1, 5);

        // Change cells [1..=3] into X.
        for col in 1..=3 {
            b.put_char(0, col, 'X', Attr::Normal);
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |row, col, len| {
            runs.push((row, col, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(0, 1, 3)]);
    }

    #[test]
    fn attribute_only_change_is_a_run() {
        let mut a = FrameBuffer::new(2, 4);
        a.put_char(1, 2, '*', Attr::Dim);
        let mut b = a.clone();
        b.put_char(1, 2, '*', Attr::Bold);

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |row, col, len| {
            runs.push((row, col, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 2, 1)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let mut a = FrameBuffer::new(3, 3);
        a.put_char(1, 1, '+', Attr::Bold);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn diff_only_prints_changed_glyphs() {
        let a = FrameBuffer::new(2, 10);
        let mut b = a.clone();
        b.put_char(1, 7, 'Q', Attr::Bold);

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('Q').count(), 1);
        // crossterm MoveTo is 1-based: row 2, column 8.
        assert!(text.contains("\x1b[2;8H"), "{text:?}");
        assert!(text.contains("\x1b[1m"), "bold attribute expected: {text:?}");
    }

    #[test]
    fn full_redraw_contains_every_row() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(0, 0, 'a', Attr::Normal);
        fb.put_char(2, 1, 'z', Attr::Dim);

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 2);
        assert!(text.contains('a') && text.contains('z'));
        assert!(text.contains("\x1b[2m"), "dim attribute expected: {text:?}");
    }
}
