//! Runtime configuration from environment variables.
//!
//! Animation constants are fixed at compile time (see `types`); only the
//! process environment is configurable:
//!
//! - `STARFIELD_FRAMES_DIR`: directory holding the ship frames (default: `frames`)
//! - `STARFIELD_LOG`: log file path; logging is off when unset or empty
//! - `STARFIELD_SEED`: RNG seed for a reproducible sky (default: from the clock)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub frames_dir: PathBuf,
    pub log_path: Option<PathBuf>,
    pub seed: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frames_dir: PathBuf::from("frames"),
            log_path: None,
            seed: clock_seed(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let frames_dir = get("STARFIELD_FRAMES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("frames"));

        let log_path = get("STARFIELD_LOG").map(PathBuf::from);

        let seed = get("STARFIELD_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        Self {
            frames_dir,
            log_path,
            seed,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
