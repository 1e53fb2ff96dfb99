//! Cooperative fixed-tic scheduler.
//!
//! Every tic resumes each live task exactly once, in insertion order, against
//! one shared [`Surface`]. Tasks only ever run one at a time, so the surface
//! needs no locking; correctness rests on each task erasing what it drew
//! before drawing elsewhere.
//!
//! The live set changes only between tics. Finished tasks are dropped at the
//! end of the pass and tasks spawned during the pass are appended after it,
//! so a freshly spawned task first runs on the following tic.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::rng::SimpleRng;
use crate::surface::Surface;
use crate::task::{Step, Task, TicContext};
use crate::types::TIC_MS;

/// Why [`Scheduler::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every task finished.
    Completed { tics: u64 },
    /// The surface reported a quit request.
    Interrupted { tics: u64 },
}

#[derive(Debug)]
pub struct Scheduler {
    tasks: Vec<Task>,
    rng: SimpleRng,
    tic: u64,
    tic_duration: Duration,
}

impl Scheduler {
    pub fn new(seed: u32) -> Self {
        Self {
            tasks: Vec::new(),
            rng: SimpleRng::new(seed),
            tic: 0,
            tic_duration: Duration::from_millis(TIC_MS),
        }
    }

    /// Pause between tics. Zero skips the sleep entirely.
    pub fn with_tic_duration(mut self, tic_duration: Duration) -> Self {
        self.tic_duration = tic_duration;
        self
    }

    pub fn push(&mut self, task: impl Into<Task>) {
        self.tasks.push(task.into());
    }

    pub fn extend<T: Into<Task>>(&mut self, tasks: impl IntoIterator<Item = T>) {
        self.tasks.extend(tasks.into_iter().map(Into::into));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tics completed so far.
    pub fn tics(&self) -> u64 {
        self.tic
    }

    pub fn rng_mut(&mut self) -> &mut SimpleRng {
        &mut self.rng
    }

    /// Resume every live task once. Returns how many tasks are still live.
    pub fn tic(&mut self, surface: &mut dyn Surface) -> usize {
        let snapshot = std::mem::take(&mut self.tasks);
        let mut spawned = Vec::new();
        self.tasks.reserve(snapshot.len());

        for mut task in snapshot {
            let step = {
                let mut ctx = TicContext::new(&mut *surface, &mut self.rng, &mut spawned);
                task.step(&mut ctx)
            };
            match step {
                Step::Continue => self.tasks.push(task),
                Step::Done => debug!(tic = self.tic, kind = task.kind(), "task finished"),
            }
        }

        if !spawned.is_empty() {
            debug!(tic = self.tic, count = spawned.len(), "tasks spawned");
            self.tasks.append(&mut spawned);
        }

        self.tic += 1;
        self.tasks.len()
    }

    /// Drive tics until no task is left or the surface asks to stop.
    ///
    /// After each tic that leaves live tasks the scheduler sleeps for the tic
    /// duration and then refreshes the surface. The final, emptying tic is
    /// neither paced nor flushed.
    pub fn run(&mut self, surface: &mut dyn Surface) -> Result<RunOutcome> {
        info!(
            tasks = self.tasks.len(),
            tic_ms = self.tic_duration.as_millis() as u64,
            "scheduler started"
        );
        loop {
            if surface.interrupted() {
                info!(tics = self.tic, "scheduler interrupted");
                return Ok(RunOutcome::Interrupted { tics: self.tic });
            }

            if self.tic(surface) == 0 {
                info!(tics = self.tic, "all tasks finished");
                return Ok(RunOutcome::Completed { tics: self.tic });
            }

            if !self.tic_duration.is_zero() {
                thread::sleep(self.tic_duration);
            }
            surface.refresh()?;
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(1)
    }
}
