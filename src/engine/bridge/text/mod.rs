//! Glyph metrics abstraction for the text writer.
//!
//! # Overview
//!
//! This module defines the interface between the layout engine and the
//! font backends that know how wide a codepoint is and how it looks.
//!
//! It does **not** parse font files or rasterize outlines itself.
//! Backends (ab_glyph, fontdue, the fallback box font) live behind
//! [`GlyphProvider`] and [`FontLoader`].
//!
//! # Responsibilities
//!
//! - Map `(codepoint, scale)` to an advance width in 26.6 fixed-point units
//! - Report whether a codepoint can be rendered
//! - Emit coverage samples for a glyph placed on a baseline
//!
//! # Data Flow
//!
//! ```text
//! font bytes → FontLoader → GlyphProvider → TextWriter → Canvas
//! ```

use std::fmt;
use std::path::Path;

use crate::engine::writer::fixed::Fixed;

/* ============================
 * Errors
 * ============================ */

#[derive(Debug)]
pub enum FontError {
    /// The bytes are not a font the backend understands.
    Parse(String),
    /// The font source could not be read.
    Io(std::io::Error),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(s) => write!(f, "failed to parse font: {s}"),
            Self::Io(e) => write!(f, "failed to read font: {e}"),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for FontError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/* ============================
 * Glyph placement
 * ============================ */

/// Pen position of a glyph, in fractional device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphOrigin {
    pub x: f32,
    /// Baseline
    pub y: f32,
}

/* ============================
 * Traits
 * ============================ */

/// Something that maps `(codepoint, scale)` to advance widths and coverage.
///
/// `scale` is the em size in device pixels, as 26.6 fixed-point.
pub trait GlyphProvider {
    fn advance_width(&self, ch: char, scale: Fixed) -> Fixed;

    /// `false` when the font has no glyph for `ch`.
    fn has_glyph(&self, ch: char) -> bool;

    /// Calls `plot(x, y, coverage)` for every covered pixel of `ch`.
    fn rasterize(
        &self,
        ch: char,
        scale: Fixed,
        origin: GlyphOrigin,
        plot: &mut dyn FnMut(i32, i32, f32),
    );

    /// Total advance of a line; control characters contribute nothing.
    fn line_advance(&self, line: &str, scale: Fixed) -> Fixed {
        line.chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| self.advance_width(ch, scale))
            .sum()
    }
}

/// Parses raw font bytes into a provider.
pub trait FontLoader: GlyphProvider + Sized {
    fn load(bytes: Vec<u8>) -> Result<Self, FontError>;

    fn load_path<P: AsRef<Path>>(path: P) -> Result<Self, FontError> {
        let bytes = std::fs::read(path)?;
        Self::load(bytes)
    }
}

/* ============================
 * Fallback
 * ============================ */

pub mod fallback;
pub use fallback::FallbackGlyphs;
