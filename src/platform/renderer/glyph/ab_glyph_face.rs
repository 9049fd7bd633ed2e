use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};

use crate::engine::bridge::text::{FontError, FontLoader, GlyphOrigin, GlyphProvider};
use crate::engine::writer::fixed::Fixed;

/// ab_glyph によるアウトラインフォント
///
/// 既定のバックエンド。グリフはアウトラインから直接カバレッジを出す。
#[derive(Clone)]
pub struct AbGlyphFont {
    font: FontArc,
}

impl AbGlyphFont {
    /// `scale` は em サイズ (px)。ab_glyph の PxScale は ascent-descent 基準なので変換する
    ///
    /// `pt_to_px_scale` は 96dpi を仮定して pt を px にするので使わない
    pub(crate) fn px_scale(&self, scale: Fixed) -> PxScale {
        let px = scale.to_f32();
        match self.font.units_per_em() {
            Some(upem) if upem > 0.0 => PxScale::from(px * self.font.height_unscaled() / upem),
            _ => PxScale::from(px),
        }
    }
}

impl std::fmt::Debug for AbGlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbGlyphFont")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl GlyphProvider for AbGlyphFont {
    fn advance_width(&self, ch: char, scale: Fixed) -> Fixed {
        let scaled = self.font.as_scaled(self.px_scale(scale));
        Fixed::from_f32(scaled.h_advance(self.font.glyph_id(ch)))
    }

    fn has_glyph(&self, ch: char) -> bool {
        self.font.glyph_id(ch).0 != 0
    }

    fn rasterize(
        &self,
        ch: char,
        scale: Fixed,
        origin: GlyphOrigin,
        plot: &mut dyn FnMut(i32, i32, f32),
    ) {
        let glyph = self
            .font
            .glyph_id(ch)
            .with_scale_and_position(self.px_scale(scale), point(origin.x, origin.y));
        if let Some(outline) = self.font.outline_glyph(glyph) {
            let bounds = outline.px_bounds();
            let (x0, y0) = (bounds.min.x as i32, bounds.min.y as i32);
            outline.draw(|x, y, coverage| plot(x0 + x as i32, y0 + y as i32, coverage));
        }
    }
}

impl FontLoader for AbGlyphFont {
    fn load(bytes: Vec<u8>) -> Result<Self, FontError> {
        let font = FontArc::try_from_vec(bytes).map_err(|e| FontError::Parse(e.to_string()))?;
        Ok(Self { font })
    }
}
