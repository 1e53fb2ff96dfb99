//! Startup assembly: the initial task set for a grid.

use tracing::info;

use crate::blink::scatter_stars;
use crate::frame::Frame;
use crate::scheduler::Scheduler;
use crate::ship::ShipController;

/// Build a scheduler holding `star_count` blinkers followed by the ship.
///
/// Stars are placed with the scheduler's own RNG, so `seed` reproduces both
/// placement and blink timing.
pub fn build_scene(
    seed: u32,
    rows: u16,
    cols: u16,
    ship_frames: [Frame; 2],
    star_count: usize,
) -> Scheduler {
    let mut scheduler = Scheduler::new(seed);
    let stars = scatter_stars(scheduler.rng_mut(), rows, cols, star_count);
    info!(seed, rows, cols, stars = stars.len(), "scene built");
    scheduler.extend(stars);
    scheduler.push(ShipController::centered(ship_frames, rows, cols));
    scheduler
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames() -> [Frame; 2] {
        [
            Frame::parse("a", "^\n").unwrap(),
            Frame::parse("b", "^\n").unwrap(),
        ]
    }

    #[test]
    fn stars_first_then_ship() {
        let sched = build_scene(3, 24, 80, frames(), 150);
        assert_eq!(sched.len(), 151);
        assert!(sched.tasks()[..150].iter().all(|t| t.kind() == "star"));
        assert_eq!(sched.tasks()[150].kind(), "ship");
    }

    #[test]
    fn same_seed_same_sky() {
        let cells = |seed| {
            build_scene(seed, 24, 80, frames(), 20)
                .tasks()
                .iter()
                .filter_map(|t| match t {
                    crate::task::Task::StarBlinker(s) => Some((s.cell(), s.glyph())),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(cells(11), cells(11));
        assert_ne!(cells(11), cells(12));
    }
}
