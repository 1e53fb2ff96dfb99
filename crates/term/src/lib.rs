//! Terminal surface module.
//!
//! A small, game-oriented rendering layer: tasks write glyphs into a
//! framebuffer through the [`core::Surface`] trait, and the renderer flushes
//! only the cells that changed since the previous tic.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Flush once per tic with minimal terminal traffic
//! - Offer a headless surface with the same semantics for tests

pub mod fb;
pub mod headless;
pub mod renderer;
pub mod surface;

pub use tui_starfield_core as core;
pub use tui_starfield_input as input;
pub use tui_starfield_types as types;

pub use fb::{Cell, FrameBuffer};
pub use headless::HeadlessSurface;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::TerminalSurface;
