//! Projectile task: a muzzle flash followed by a tracer that flies until it
//! leaves the playable interior.

use crate::task::{Step, TicContext};
use crate::types::{
    Attr, Position, MUZZLE_FLASH_GLYPH, PROJECTILE_COLUMN_SPEED, PROJECTILE_ROW_SPEED,
    SHELL_GLYPH, TRACER_HORIZONTAL, TRACER_VERTICAL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShotPhase {
    Flash,
    Shell,
    Flight,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    position: Position,
    row_speed: f64,
    column_speed: f64,
    phase: ShotPhase,
}

impl Projectile {
    /// Straight up at the default speed.
    pub fn new(start: Position) -> Self {
        Self::with_velocity(start, PROJECTILE_ROW_SPEED, PROJECTILE_COLUMN_SPEED)
    }

    pub fn with_velocity(start: Position, row_speed: f64, column_speed: f64) -> Self {
        Self {
            position: start,
            row_speed,
            column_speed,
            phase: ShotPhase::Flash,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Tracer glyph: `-` with any horizontal drift, `|` otherwise.
    pub fn glyph(&self) -> char {
        if self.column_speed != 0.0 {
            TRACER_HORIZONTAL
        } else {
            TRACER_VERTICAL
        }
    }

    pub fn step(&mut self, ctx: &mut TicContext<'_>) -> Step {
        let (row, col) = self.position.cell();
        match self.phase {
            ShotPhase::Flash => {
                ctx.surface.signal_alert();
                ctx.surface.put_char(row, col, MUZZLE_FLASH_GLYPH, Attr::Normal);
                self.phase = ShotPhase::Shell;
            }
            ShotPhase::Shell => {
                ctx.surface.put_char(row, col, SHELL_GLYPH, Attr::Normal);
                self.phase = ShotPhase::Flight;
            }
            ShotPhase::Flight => {
                ctx.surface.put_char(row, col, ' ', Attr::Normal);
                self.position = self.position.offset(self.row_speed, self.column_speed);

                let (rows, cols) = ctx.surface.dimensions();
                if !self.in_interior(rows, cols) {
                    return Step::Done;
                }
                let (row, col) = self.position.cell();
                ctx.surface.put_char(row, col, self.glyph(), Attr::Normal);
            }
        }
        Step::Continue
    }

    /// The rounded cell is off every border row and column.
    fn in_interior(&self, rows: u16, cols: u16) -> bool {
        let (row, col) = self.position.cell();
        (1..=i32::from(rows) - 2).contains(&row) && (1..=i32::from(cols) - 2).contains(&col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::testing::{with_ctx, GridSurface};

    fn step(shot: &mut Projectile, s: &mut GridSurface) -> Step {
        let mut rng = SimpleRng::new(1);
        with_ctx(s, &mut rng, |ctx| shot.step(ctx)).0
    }

    #[test]
    fn flash_then_shell_then_tracer() {
        let mut s = GridSurface::new(20, 40);
        let mut shot = Projectile::new(Position::new(10.0, 5.0));

        assert_eq!(step(&mut shot, &mut s), Step::Continue);
        assert_eq!(s.glyph(10, 5), '*');
        assert_eq!(s.alerts, 1);

        assert_eq!(step(&mut shot, &mut s), Step::Continue);
        assert_eq!(s.glyph(10, 5), 'O');

        assert_eq!(step(&mut shot, &mut s), Step::Continue);
        // 9.7 rounds back onto row 10; the shell was blanked first.
        assert_eq!(s.glyph(10, 5), '|');
        assert_eq!(s.visible_cells(), 1);

        step(&mut shot, &mut s);
        step(&mut shot, &mut s);
        assert_eq!(s.glyph(9, 5), '|');
        assert_eq!(s.glyph(10, 5), ' ');
        assert_eq!(s.alerts, 1, "alert fires once per shot");
    }

    #[test]
    fn horizontal_drift_uses_dash() {
        let shot = Projectile::with_velocity(Position::new(5.0, 5.0), 0.0, 0.5);
        assert_eq!(shot.glyph(), '-');
        assert_eq!(Projectile::new(Position::default()).glyph(), '|');
    }

    #[test]
    fn upward_shot_completes_and_stays_inside_rows() {
        let height = 20u16;
        let mut s = GridSurface::new(height, 40);
        let start = f64::from(height - 2);
        let mut shot = Projectile::with_velocity(Position::new(start, 20.0), -0.3, 0.0);

        let mut steps = 0;
        let mut last_row = i32::MAX;
        while step(&mut shot, &mut s) == Step::Continue {
            steps += 1;
            assert!(steps < 1000, "projectile never finished");
            let (row, _) = shot.position().cell();
            assert!(row <= last_row, "tracer moved backwards");
            last_row = row;
        }
        steps += 1;

        // Two launch tics plus roughly (H - 2.5) / 0.3 flight tics.
        assert!((59..=62).contains(&steps), "finished after {steps} steps");
        for &(row, col, _, _) in &s.writes {
            assert!((1..=i32::from(height) - 2).contains(&row), "drew on row {row}");
            assert_eq!(col, 20);
        }
        assert_eq!(s.visible_cells(), 0, "nothing left behind");
    }

    #[test]
    fn diagonal_shot_finishes_at_side_border() {
        let mut s = GridSurface::new(30, 12);
        let mut shot = Projectile::with_velocity(Position::new(15.0, 6.0), 0.0, 1.0);
        let mut steps = 0;
        while step(&mut shot, &mut s) == Step::Continue {
            steps += 1;
        }
        // Flash, shell, then columns 7..=10.
        assert_eq!(steps, 6);
        assert!(s.writes.iter().all(|&(_, c, _, _)| c <= 10));
        assert_eq!(s.visible_cells(), 0);
    }
}
