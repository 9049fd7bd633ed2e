use fontdue::{Font as FontDue, FontSettings};

use crate::engine::bridge::text::{FontError, FontLoader, GlyphOrigin, GlyphProvider};
use crate::engine::writer::fixed::Fixed;

/// fontdue によるビットマップフォント
///
/// fontdue はラスタライズ結果をビットマップで返すので、
/// それを左上基準でキャンバスへ置く。
pub struct FontdueFont {
    font: FontDue,
}

impl FontdueFont {
    /// 同じフォントファイル内の別フェイスを選ぶ (.ttc 用)
    pub fn from_collection(bytes: &[u8], collection_index: u32) -> Result<Self, FontError> {
        let settings = FontSettings {
            collection_index,
            ..FontSettings::default()
        };
        let font = FontDue::from_bytes(bytes, settings).map_err(|e| FontError::Parse(e.to_string()))?;
        Ok(Self { font })
    }
}

impl std::fmt::Debug for FontdueFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdueFont")
            .field("name", &self.font.name())
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl GlyphProvider for FontdueFont {
    fn advance_width(&self, ch: char, scale: Fixed) -> Fixed {
        let metrics = self.font.metrics(ch, scale.to_f32());
        Fixed::from_f32(metrics.advance_width)
    }

    fn has_glyph(&self, ch: char) -> bool {
        self.font.lookup_glyph_index(ch) != 0
    }

    fn rasterize(
        &self,
        ch: char,
        scale: Fixed,
        origin: GlyphOrigin,
        plot: &mut dyn FnMut(i32, i32, f32),
    ) {
        let (metrics, bitmap) = self.font.rasterize(ch, scale.to_f32());
        if metrics.width == 0 || metrics.height == 0 {
            return;
        }
        // ymin はベースラインからビットマップ下端までの距離 (上向き正)
        let left = origin.x.round() as i32 + metrics.xmin;
        let top = origin.y.round() as i32 - metrics.ymin - metrics.height as i32;
        for (row, line) in bitmap.chunks(metrics.width).enumerate() {
            for (col, &v) in line.iter().enumerate() {
                if v == 0 {
                    continue;
                }
                plot(left + col as i32, top + row as i32, v as f32 / 255.0);
            }
        }
    }
}

impl FontLoader for FontdueFont {
    fn load(bytes: Vec<u8>) -> Result<Self, FontError> {
        Self::from_collection(&bytes, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            FontdueFont::load(b"not a font at all".to_vec()),
            Err(FontError::Parse(_))
        ));
    }
}
