//! Frame assets: immutable multi-line ASCII sprites.
//!
//! A frame is a rectangle of characters. Every line must have the same width;
//! spaces are transparent when the frame is drawn.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// File names of the two ship animation frames, in cycle order.
pub const SHIP_FRAME_FILES: [&str; 2] = ["rocket_frame_1.txt", "rocket_frame_2.txt"];

/// Errors raised while loading or validating a frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("Failed to read frame {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Frame '{name}' has no visible glyphs")]
    Empty { name: String },

    #[error("Frame '{name}': line {line} is {found} columns wide, expected {expected}")]
    RaggedLine {
        name: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Ship frames differ in size: {first:?} vs {second:?}")]
    SizeMismatch { first: (u16, u16), second: (u16, u16) },
}

/// A validated sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<Vec<char>>,
    width: u16,
}

impl Frame {
    /// Parse frame text. `name` is only used in error messages.
    ///
    /// Trailing blank lines are ignored; every remaining line must be as wide
    /// as the first one.
    pub fn parse(name: &str, text: &str) -> Result<Self, FrameError> {
        let mut lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        while lines.last().is_some_and(|l| l.iter().all(|c| c.is_whitespace())) {
            lines.pop();
        }

        if lines.is_empty() {
            return Err(FrameError::Empty {
                name: name.to_string(),
            });
        }

        let expected = lines[0].len();
        for (i, line) in lines.iter().enumerate() {
            if line.len() != expected {
                return Err(FrameError::RaggedLine {
                    name: name.to_string(),
                    line: i + 1,
                    expected,
                    found: line.len(),
                });
            }
        }

        Ok(Self {
            width: expected.min(u16::MAX as usize) as u16,
            lines,
        })
    }

    /// Read and parse a frame file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FrameError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FrameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let frame = Self::parse(&path.display().to_string(), &text)?;
        debug!(path = %path.display(), size = ?frame.size(), "loaded frame");
        Ok(frame)
    }

    /// `(height, width)` in cells.
    pub fn size(&self) -> (u16, u16) {
        (self.height(), self.width)
    }

    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn lines(&self) -> impl Iterator<Item = &[char]> {
        self.lines.iter().map(Vec::as_slice)
    }
}

/// Load both ship frames from `dir` and check they share a footprint.
pub fn load_ship_frames(dir: impl AsRef<Path>) -> Result<[Frame; 2], FrameError> {
    let dir = dir.as_ref();
    let first = Frame::load(dir.join(SHIP_FRAME_FILES[0]))?;
    let second = Frame::load(dir.join(SHIP_FRAME_FILES[1]))?;
    if first.size() != second.size() {
        return Err(FrameError::SizeMismatch {
            first: first.size(),
            second: second.size(),
        });
    }
    Ok([first, second])
}
