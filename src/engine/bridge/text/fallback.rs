use super::{FontError, FontLoader, GlyphOrigin, GlyphProvider};
use crate::engine::writer::fixed::Fixed;

/// Fallback glyph provider.
///
/// This implementation does not rely on any font engine.
/// Every glyph advances by `font size * avg_char_width_ratio` and is drawn
/// as a solid box standing on the baseline, one pixel narrower than its advance.
/// Intended for testing, bring-up, and environments without font support.
#[derive(Debug, Clone)]
pub struct FallbackGlyphs {
    pub avg_char_width_ratio: f32,
    missing: Vec<char>,
}

impl Default for FallbackGlyphs {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl FallbackGlyphs {
    pub fn new(avg_char_width_ratio: f32) -> Self {
        Self {
            avg_char_width_ratio,
            missing: Vec::new(),
        }
    }

    /// 描画できない文字として扱う集合を指定する
    pub fn with_missing<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.missing.extend(chars);
        self
    }
}

impl GlyphProvider for FallbackGlyphs {
    fn advance_width(&self, _ch: char, scale: Fixed) -> Fixed {
        Fixed::from_f32(scale.to_f32() * self.avg_char_width_ratio)
    }

    fn has_glyph(&self, ch: char) -> bool {
        !self.missing.contains(&ch)
    }

    fn rasterize(
        &self,
        ch: char,
        scale: Fixed,
        origin: GlyphOrigin,
        plot: &mut dyn FnMut(i32, i32, f32),
    ) {
        if ch.is_whitespace() || !self.has_glyph(ch) {
            return;
        }
        let width = self.advance_width(ch, scale).floor() - 1;
        let x0 = origin.x.floor() as i32;
        let baseline = origin.y.floor() as i32;
        let top = baseline - scale.floor();
        for y in top..baseline {
            for x in x0..x0 + width {
                plot(x, y, 1.0);
            }
        }
    }
}

impl FontLoader for FallbackGlyphs {
    /// Bytes are a UTF-8 descriptor holding the advance ratio, e.g. `b"0.6"`.
    fn load(bytes: Vec<u8>) -> Result<Self, FontError> {
        let text = String::from_utf8(bytes)
            .map_err(|_| FontError::Parse("fallback descriptor is not UTF-8".to_string()))?;
        let ratio: f32 = text
            .trim()
            .parse()
            .map_err(|e| FontError::Parse(format!("bad fallback ratio {text:?}: {e}")))?;
        if !(ratio > 0.0 && ratio.is_finite()) {
            return Err(FontError::Parse(format!(
                "fallback ratio must be positive, got {ratio}"
            )));
        }
        Ok(Self::new(ratio))
    }
}
