//! Multi-line text rendering onto raster canvases.
//!
//! ```text
//! font bytes → FontLoader → TextWriter ─ draw_lines ─→ Canvas
//! ```
//!
//! The engine side ([`engine`]) knows nothing about font formats; the
//! platform side ([`platform`]) plugs ab_glyph / fontdue in and finds system
//! fonts.

pub mod engine;
pub mod platform;

pub use engine::bridge::text::{FallbackGlyphs, FontError, FontLoader, GlyphOrigin, GlyphProvider};
pub use engine::renderer::{Canvas, Color, Padding};
pub use engine::writer::fixed::Fixed;
pub use engine::writer::{
    DrawError, DrawReport, LineOutcome, TextDrawer, TextWriter, TruncationPolicy, WriterSettings,
};
pub use platform::renderer::{AbGlyphFont, FontdueFont};
