//! Terminal starfield runner (default binary).
//!
//! Loads the ship frames, then hands a terminal surface to the cooperative
//! scheduler until every task finishes or the player quits (`q`, `Esc`,
//! `Ctrl-C`).

use anyhow::{Context, Result};
use tracing::info;

use tui_starfield::config::AppConfig;
use tui_starfield::core::{build_scene, draw_border, load_ship_frames, Frame, RunOutcome, Surface};
use tui_starfield::logging;
use tui_starfield::term::TerminalSurface;
use tui_starfield::types::MAX_STARS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_path {
        logging::init_global(path)?;
    }

    // Bad assets fail here, before the terminal enters raw mode.
    let frames = load_ship_frames(&config.frames_dir).with_context(|| {
        format!(
            "failed to load ship frames from {}",
            config.frames_dir.display()
        )
    })?;

    // Entering and running share one path so the terminal is restored
    // even if raw mode was switched on before a later step failed.
    let mut surface = TerminalSurface::new()?;
    let result = surface.session(|surface| run(surface, frames, config.seed));

    match result? {
        RunOutcome::Completed { tics } => info!(tics, "animation finished"),
        RunOutcome::Interrupted { tics } => info!(tics, "animation stopped by user"),
    }
    Ok(())
}

fn run(surface: &mut TerminalSurface, frames: [Frame; 2], seed: u32) -> Result<RunOutcome> {
    surface.set_cursor_visible(false)?;
    draw_border(surface);

    let (rows, cols) = surface.dimensions();
    let mut scheduler = build_scene(seed, rows, cols, frames, MAX_STARS);
    scheduler.run(surface)
}
