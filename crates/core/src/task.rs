//! Animation tasks and the per-step context they run in.
//!
//! A task is a resumable state machine. Each call to [`Task::step`] runs it up
//! to its next suspension point; waits that span several tics are counters the
//! task decrements once per step.

use crate::blink::StarBlinker;
use crate::projectile::Projectile;
use crate::rng::SimpleRng;
use crate::ship::ShipController;
use crate::surface::Surface;

/// Outcome of resuming a task once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Suspended; resume again next tic.
    Continue,
    /// Finished normally; the scheduler drops it.
    Done,
}

/// What a task may touch while it runs.
///
/// New tasks go through [`TicContext::spawn`] and join the live set only
/// after the current tic's pass has finished.
pub struct TicContext<'a> {
    pub surface: &'a mut dyn Surface,
    pub rng: &'a mut SimpleRng,
    spawned: &'a mut Vec<Task>,
}

impl<'a> TicContext<'a> {
    pub fn new(
        surface: &'a mut dyn Surface,
        rng: &'a mut SimpleRng,
        spawned: &'a mut Vec<Task>,
    ) -> Self {
        Self {
            surface,
            rng,
            spawned,
        }
    }

    pub fn spawn(&mut self, task: impl Into<Task>) {
        self.spawned.push(task.into());
    }
}

#[derive(Debug, Clone)]
pub enum Task {
    StarBlinker(StarBlinker),
    ShipController(ShipController),
    Projectile(Projectile),
}

impl Task {
    pub fn step(&mut self, ctx: &mut TicContext<'_>) -> Step {
        match self {
            Task::StarBlinker(star) => star.step(ctx),
            Task::ShipController(ship) => ship.step(ctx),
            Task::Projectile(shot) => shot.step(ctx),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Task::StarBlinker(_) => "star",
            Task::ShipController(_) => "ship",
            Task::Projectile(_) => "projectile",
        }
    }
}

impl From<StarBlinker> for Task {
    fn from(star: StarBlinker) -> Self {
        Task::StarBlinker(star)
    }
}

impl From<ShipController> for Task {
    fn from(ship: ShipController) -> Self {
        Task::ShipController(ship)
    }
}

impl From<Projectile> for Task {
    fn from(shot: Projectile) -> Self {
        Task::Projectile(shot)
    }
}
