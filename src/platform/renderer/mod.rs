pub mod glyph;

pub use glyph::{AbGlyphFont, FontdueFont};
