//! Core animation module - pure, deterministic, and testable
//!
//! This crate holds the cooperative scheduler and the animation tasks it
//! drives. It never touches a real terminal: everything draws through the
//! [`Surface`] trait, which makes the whole animation replayable in tests.
//!
//! # Module Structure
//!
//! - [`scheduler`]: fixed-tic loop that resumes each live task once per tic
//! - [`task`]: the [`Task`] variant set, [`Step`] and the per-step [`TicContext`]
//! - [`blink`]: star blinker task and star scattering
//! - [`ship`]: player-controlled ship with border clamping
//! - [`projectile`]: self-terminating shots
//! - [`sprite`]: frame and border drawing with clipping
//! - [`frame`]: sprite assets and their loader
//! - [`rng`]: deterministic LCG shared by every task
//! - [`scene`]: startup task set
//!
//! # Example
//!
//! ```
//! use tui_starfield_core::{Frame, Position, Projectile, Scheduler};
//!
//! let mut sched = Scheduler::new(7);
//! sched.push(Projectile::new(Position::new(5.0, 5.0)));
//! assert_eq!(sched.len(), 1);
//!
//! let frame = Frame::parse("ship", " ^ \n/_\\\n").unwrap();
//! assert_eq!(frame.size(), (2, 3));
//! ```
//!
//! # Timing
//!
//! One tic is [`types::TIC_MS`] milliseconds. Tasks have no clock: a wait of
//! `n` tics is `n` suspensions, each consumed by one scheduler pass.

pub mod blink;
pub mod frame;
pub mod projectile;
pub mod rng;
pub mod scene;
pub mod scheduler;
pub mod ship;
pub mod sprite;
pub mod surface;
pub mod task;

#[cfg(test)]
mod testing;

pub use tui_starfield_types as types;

// Re-export commonly used types for convenience
pub use blink::{scatter_stars, StarBlinker};
pub use frame::{load_ship_frames, Frame, FrameError, SHIP_FRAME_FILES};
pub use projectile::Projectile;
pub use rng::SimpleRng;
pub use scene::build_scene;
pub use scheduler::{RunOutcome, Scheduler};
pub use ship::ShipController;
pub use sprite::{border_cells, draw_border, draw_frame};
pub use surface::Surface;
pub use task::{Step, Task, TicContext};
pub use types::{Attr, Control, Position};
