use super::fixed::Fixed;
use super::truncate::TruncationPolicy;
use crate::engine::renderer::Color;

/// Line leading as a multiple of the font size.
pub const DEFAULT_SPACING: f32 = 1.5;
pub const DEFAULT_DPI: f32 = 72.0;
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Rendering configuration of a [`TextWriter`](super::TextWriter).
///
/// Built once and handed to the writer together with its font. Only the font
/// size may change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WriterSettings {
    /// Resolution used to convert points to device pixels.
    pub dpi: f32,
    /// Points
    pub font_size: f32,
    pub spacing: f32,
    pub ellipsis: String,
    pub truncation: TruncationPolicy,
    pub color: Color,
}

impl Default for WriterSettings {
    fn default() -> Self {
        Self::new(DEFAULT_DPI, 12.0)
    }
}

impl WriterSettings {
    pub fn new(dpi: f32, font_size: f32) -> Self {
        Self {
            dpi,
            font_size,
            spacing: DEFAULT_SPACING,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            truncation: TruncationPolicy::default(),
            color: Color::BLACK,
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    pub fn with_truncation(mut self, truncation: TruncationPolicy) -> Self {
        self.truncation = truncation;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Points to device pixels in 26.6, truncated toward zero.
    pub fn point_to_fixed(&self, pt: f32) -> Fixed {
        Fixed((pt * self.dpi * 64.0 / 72.0) as i32)
    }

    /// Font em size in device pixels.
    pub fn scale(&self) -> Fixed {
        self.point_to_fixed(self.font_size)
    }

    /// Line height in points: `font_size * spacing`.
    pub fn line_height_pt(&self) -> f32 {
        self.font_size * self.spacing
    }

    pub fn line_height(&self) -> Fixed {
        self.point_to_fixed(self.line_height_pt())
    }
}
