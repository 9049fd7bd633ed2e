//! フォントバックエンド
//!
//! どちらも [`GlyphProvider`](crate::engine::bridge::text::GlyphProvider) を実装する。
//! 既定は ab_glyph、fontdue は比較・代替用。

pub mod ab_glyph_face;
pub mod fontdue_face;

pub use ab_glyph_face::AbGlyphFont;
pub use fontdue_face::FontdueFont;
