//! Ship controller task.
//!
//! Every step erases the frame drawn on the previous step, applies the
//! player's input, and draws the next frame of the animation cycle. The ship
//! never finishes.

use tracing::debug;

use crate::frame::Frame;
use crate::projectile::Projectile;
use crate::sprite::draw_frame;
use crate::task::{Step, TicContext};
use crate::types::{Position, BORDER_SIZE, SHIP_SPEED};

#[derive(Debug, Clone)]
pub struct ShipController {
    frames: [Frame; 2],
    position: Position,
    speed: f64,
    /// Frame index currently on screen, if any.
    shown: Option<usize>,
}

impl ShipController {
    pub fn new(frames: [Frame; 2], position: Position) -> Self {
        Self {
            frames,
            position,
            speed: SHIP_SPEED,
            shown: None,
        }
    }

    /// Start in the middle of a `rows` x `cols` grid.
    pub fn centered(frames: [Frame; 2], rows: u16, cols: u16) -> Self {
        let position = Position::new(f64::from(rows / 2), f64::from(cols / 2));
        Self::new(frames, position)
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// `(height, width)` of the sprite.
    pub fn footprint(&self) -> (u16, u16) {
        self.frames[0].size()
    }

    pub fn step(&mut self, ctx: &mut TicContext<'_>) -> Step {
        let (frame_h, frame_w) = self.footprint();

        let mut target = self.position;
        let mut fire = false;
        if let Some(shown) = self.shown {
            let control = ctx.surface.read_control();
            draw_frame(ctx.surface, self.position, &self.frames[shown], true);
            target = self.position.offset(
                f64::from(control.row_delta) * self.speed,
                f64::from(control.col_delta) * self.speed,
            );
            fire = control.fire;
        }

        // Reading input may have resized the grid.
        let (rows, cols) = ctx.surface.dimensions();
        self.position = Position::new(
            clamp_axis(target.row, rows, frame_h),
            clamp_axis(target.column, cols, frame_w),
        );

        if fire {
            match self.muzzle() {
                Some(muzzle) => {
                    debug!(row = muzzle.row, column = muzzle.column, "ship fired");
                    ctx.spawn(Projectile::new(muzzle));
                }
                None => debug!("shot blocked by top border"),
            }
        }

        let next = self.shown.map_or(0, |i| (i + 1) % self.frames.len());
        draw_frame(ctx.surface, self.position, &self.frames[next], false);
        self.shown = Some(next);
        Step::Continue
    }

    /// Cell just above the nose, or `None` when that cell is the border row.
    fn muzzle(&self) -> Option<Position> {
        let (_, frame_w) = self.footprint();
        let row = self.position.row - 1.0;
        if row.round() < f64::from(BORDER_SIZE) {
            return None;
        }
        Some(Position::new(row, self.position.column + f64::from(frame_w / 2)))
    }
}

/// Keep a sprite of `footprint` cells inside `[border, extent - footprint - border]`.
///
/// Both ends are enforced regardless of the direction of travel. When the
/// grid is too small for the sprite the far end collapses onto the near one.
fn clamp_axis(value: f64, extent: u16, footprint: u16) -> f64 {
    let near = f64::from(BORDER_SIZE);
    let far = (f64::from(extent) - f64::from(footprint) - near).max(near);
    value.clamp(near, far)
}
