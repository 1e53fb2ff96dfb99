//! Star blinker task.
//!
//! A star cycles dim → normal → bold → normal forever. Each cycle starts with
//! a random pause so neighbouring stars drift out of phase.

use std::ops::RangeInclusive;

use crate::rng::SimpleRng;
use crate::task::{Step, TicContext};
use crate::types::{
    Attr, BLINK_BOLD_TICS, BLINK_DELAY_MAX, BLINK_DELAY_MIN, BLINK_DIM_TICS, BLINK_FALL_TICS,
    BLINK_RISE_TICS, BORDER_SIZE, STAR_GLYPHS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlinkPhase {
    Delay,
    Dim,
    Rise,
    Bold,
    Fall,
}

impl BlinkPhase {
    fn next(self) -> Self {
        match self {
            BlinkPhase::Delay => BlinkPhase::Dim,
            BlinkPhase::Dim => BlinkPhase::Rise,
            BlinkPhase::Rise => BlinkPhase::Bold,
            BlinkPhase::Bold => BlinkPhase::Fall,
            BlinkPhase::Fall => BlinkPhase::Delay,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StarBlinker {
    row: i32,
    column: i32,
    glyph: char,
    phase: BlinkPhase,
    /// Suspensions left before the next phase change.
    remaining: u32,
    delay: RangeInclusive<u32>,
}

impl StarBlinker {
    pub fn new(row: u16, column: u16, glyph: char) -> Self {
        Self {
            row: i32::from(row),
            column: i32::from(column),
            glyph,
            // Parked at the end of a cycle so the first step rolls a delay.
            phase: BlinkPhase::Fall,
            remaining: 0,
            delay: BLINK_DELAY_MIN..=BLINK_DELAY_MAX,
        }
    }

    /// Override the random pause range. Values below one are treated as one.
    pub fn with_delay_range(mut self, delay: RangeInclusive<u32>) -> Self {
        self.delay = delay;
        self
    }

    pub fn cell(&self) -> (i32, i32) {
        (self.row, self.column)
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn step(&mut self, ctx: &mut TicContext<'_>) -> Step {
        if self.remaining == 0 {
            self.phase = self.phase.next();
            self.remaining = match self.phase {
                BlinkPhase::Delay => ctx
                    .rng
                    .range_inclusive(*self.delay.start(), *self.delay.end())
                    .max(1),
                BlinkPhase::Dim => self.show(ctx, Attr::Dim, BLINK_DIM_TICS),
                BlinkPhase::Rise => self.show(ctx, Attr::Normal, BLINK_RISE_TICS),
                BlinkPhase::Bold => self.show(ctx, Attr::Bold, BLINK_BOLD_TICS),
                BlinkPhase::Fall => self.show(ctx, Attr::Normal, BLINK_FALL_TICS),
            };
        }
        self.remaining -= 1;
        Step::Continue
    }

    fn show(&self, ctx: &mut TicContext<'_>, attr: Attr, hold: u32) -> u32 {
        ctx.surface.put_char(self.row, self.column, self.glyph, attr);
        hold
    }
}

/// Scatter `count` stars over the grid interior with random glyphs.
///
/// Returns nothing when the grid is too small to have an interior.
pub fn scatter_stars(rng: &mut SimpleRng, rows: u16, cols: u16, count: usize) -> Vec<StarBlinker> {
    let border = BORDER_SIZE;
    if rows <= 2 * border || cols <= 2 * border {
        return Vec::new();
    }
    let glyphs: Vec<char> = STAR_GLYPHS.chars().collect();

    (0..count)
        .map(|_| {
            let row = rng.range_inclusive(u32::from(border), u32::from(rows - border - 1));
            let column = rng.range_inclusive(u32::from(border), u32::from(cols - border - 1));
            let glyph = rng.choose(&glyphs).unwrap_or('*');
            StarBlinker::new(row as u16, column as u16, glyph)
        })
        .collect()
}
