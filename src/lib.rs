//! TUI Starfield (workspace facade crate).
//!
//! This package exposes `tui_starfield::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the
//! process-level pieces the binary needs: environment [`config`] and file
//! [`logging`].

pub mod config;
pub mod logging;

pub use tui_starfield_core as core;
pub use tui_starfield_input as input;
pub use tui_starfield_term as term;
pub use tui_starfield_types as types;
