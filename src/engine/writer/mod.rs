//! Multi-line text writer.
//!
//! Lays pre-split lines out top-down on a [`Canvas`], shortening lines that
//! overflow horizontally and silently stopping once the next baseline would
//! leave the vertical padding box.

pub mod fixed;
pub mod settings;
pub mod truncate;

use std::fmt;
use std::path::Path;

use crate::engine::bridge::text::{FontError, FontLoader, GlyphOrigin, GlyphProvider};
use crate::engine::renderer::{Canvas, Padding};
use fixed::Fixed;
pub use settings::WriterSettings;
pub use truncate::TruncationPolicy;

/* ============================
 * Errors
 * ============================ */

#[derive(Debug, Clone, PartialEq)]
pub enum DrawError {
    /// The font cannot render `ch` of line `line`.
    MissingGlyph { line: usize, ch: char },
    /// A centered block is taller than the canvas.
    NoSpace { required: Fixed, available: Fixed },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGlyph { line, ch } => {
                write!(f, "no glyph for {ch:?} (U+{:04X}) in line {line}", *ch as u32)
            }
            Self::NoSpace {
                required,
                available,
            } => write!(
                f,
                "no space left to center: block needs {}px, canvas has {}px",
                required.to_f32(),
                available.to_f32()
            ),
        }
    }
}

impl std::error::Error for DrawError {}

/* ============================
 * Draw Result
 * ============================ */

#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// Position in the caller's line slice
    pub index: usize,
    /// Text actually drawn, ellipsis included
    pub text: String,
    pub truncated: bool,
    /// Measured advance of the caller's line, before truncation
    pub advance: Fixed,
}

/// What a draw call actually put on the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawReport {
    pub lines: Vec<LineOutcome>,
    /// Lines left out by the vertical stop
    pub skipped: usize,
}

impl DrawReport {
    pub fn drawn(&self) -> usize {
        self.lines.len()
    }

    pub fn truncated(&self) -> usize {
        self.lines.iter().filter(|l| l.truncated).count()
    }
}

/* ============================
 * Writer
 * ============================ */

/// Draws text blocks with one font and one set of [`WriterSettings`].
///
/// A writer always holds a font; building one is the only way to get from
/// bare settings to something that can draw.
pub struct TextWriter<F> {
    font: F,
    settings: WriterSettings,
}

impl<F: FontLoader> TextWriter<F> {
    pub fn from_font_bytes(bytes: Vec<u8>, settings: WriterSettings) -> Result<Self, FontError> {
        let font = F::load(bytes)?;
        log::info!(target: "TextWriter::font", "font loaded, size={}pt dpi={}", settings.font_size, settings.dpi);
        Ok(Self::new(font, settings))
    }

    pub fn from_font_path<P: AsRef<Path>>(
        path: P,
        settings: WriterSettings,
    ) -> Result<Self, FontError> {
        log::debug!(target: "TextWriter::font", "loading font from {}", path.as_ref().display());
        let font = F::load_path(path)?;
        log::info!(target: "TextWriter::font", "font loaded, size={}pt dpi={}", settings.font_size, settings.dpi);
        Ok(Self::new(font, settings))
    }

    /// Replaces the font. On error the current font stays in place.
    pub fn set_font_bytes(&mut self, bytes: Vec<u8>) -> Result<(), FontError> {
        self.replace_font(F::load(bytes))
    }

    /// Same as [`set_font_bytes`](Self::set_font_bytes), reading the bytes from `path`.
    pub fn set_font_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), FontError> {
        self.replace_font(F::load_path(path))
    }

    fn replace_font(&mut self, loaded: Result<F, FontError>) -> Result<(), FontError> {
        let font = loaded.inspect_err(|e| {
            log::warn!(target: "TextWriter::font", "keeping previous font: {e}");
        })?;
        self.font = font;
        log::info!(target: "TextWriter::font", "font replaced");
        Ok(())
    }
}

impl<F: GlyphProvider> TextWriter<F> {
    pub fn new(font: F, settings: WriterSettings) -> Self {
        Self { font, settings }
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    pub fn set_font(&mut self, font: F) {
        self.font = font;
    }

    pub fn settings(&self) -> &WriterSettings {
        &self.settings
    }

    /// No validation; non-positive sizes are the caller's problem.
    pub fn set_font_size(&mut self, size: f32) {
        self.settings.font_size = size;
    }

    pub fn line_height(&self) -> Fixed {
        self.settings.line_height()
    }

    /// Draws `lines` top-down inside `padding`.
    ///
    /// The first baseline sits at `padding.top` plus the font's pixel size.
    /// Lines wider than the padding box are shortened per
    /// [`WriterSettings::truncation`]. Once the next baseline would pass
    /// `height - padding.bottom` the remaining lines are skipped and the call
    /// still succeeds; the report says how many.
    ///
    /// A line with a glyph the font lacks aborts the call. Lines drawn before
    /// it stay on the canvas.
    pub fn draw_lines<C, S>(
        &self,
        canvas: &mut C,
        padding: Padding,
        lines: &[S],
    ) -> Result<DrawReport, DrawError>
    where
        C: Canvas + ?Sized,
        S: AsRef<str>,
    {
        let width = Fixed::from_px(canvas.width());
        let height = Fixed::from_px(canvas.height());
        let pl = Fixed::from_px(padding.left);
        let pr = Fixed::from_px(padding.right);
        let pb = Fixed::from_px(padding.bottom);
        let text_space = width - (pl + pr);

        let scale = self.settings.scale();
        let line_height = self.settings.line_height();
        let mut y = Fixed::from_px(padding.top) + Fixed::from_int(scale.floor());

        let mut report = DrawReport::default();
        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let advance = self.font.line_advance(line, scale);

            let overflows = width - (pl + advance) < pr;
            let text = if overflows {
                let t = truncate::truncate_line(
                    &self.font,
                    line,
                    advance,
                    text_space,
                    scale,
                    &self.settings.ellipsis,
                    self.settings.truncation,
                );
                log::debug!(target: "TextWriter::draw_lines", "line {index}: advance {advance} > space {text_space}, drawing {t:?}");
                t
            } else {
                line.to_string()
            };

            if let Some(ch) = text
                .chars()
                .find(|ch| !ch.is_control() && !self.font.has_glyph(*ch))
            {
                log::warn!(target: "TextWriter::draw_lines", "line {index}: missing glyph {ch:?}, {} lines drawn", report.drawn());
                return Err(DrawError::MissingGlyph { line: index, ch });
            }

            self.render_line(canvas, &text, pl, y, scale);
            report.lines.push(LineOutcome {
                index,
                text,
                truncated: overflows,
                advance,
            });

            y += line_height;
            if y > height - pb {
                report.skipped = lines.len() - index - 1;
                if report.skipped > 0 {
                    log::debug!(target: "TextWriter::draw_lines", "out of vertical space at {y}, skipping {} lines", report.skipped);
                }
                break;
            }
        }
        Ok(report)
    }

    /// Centers the block vertically, then draws it like [`draw_lines`](Self::draw_lines).
    ///
    /// Fails with [`DrawError::NoSpace`] without touching the canvas when
    /// `lines.len() * line_height` exceeds the canvas height.
    pub fn draw_lines_centered<C, S>(
        &self,
        canvas: &mut C,
        padding_left: u32,
        padding_right: u32,
        lines: &[S],
    ) -> Result<DrawReport, DrawError>
    where
        C: Canvas + ?Sized,
        S: AsRef<str>,
    {
        let height = Fixed::from_px(canvas.height());
        let line_height = self.settings.line_height();
        let text_height: Fixed = std::iter::repeat_n(line_height, lines.len()).sum();

        let space_left = height - text_height;
        if space_left < Fixed::ZERO {
            return Err(DrawError::NoSpace {
                required: text_height,
                available: height,
            });
        }
        let pad = space_left.half().floor() as u32;
        log::debug!(target: "TextWriter::draw_lines_centered", "block {text_height} in {height}, pad {pad}px");

        let padding = Padding::new(padding_left, padding_right, pad, pad);
        self.draw_lines(canvas, padding, lines)
    }

    fn render_line<C: Canvas + ?Sized>(&self, canvas: &mut C, text: &str, x: Fixed, baseline: Fixed, scale: Fixed) {
        let color = self.settings.color;
        let mut pen = x;
        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }
            self.font.rasterize(
                ch,
                scale,
                GlyphOrigin {
                    x: pen.to_f32(),
                    y: baseline.to_f32(),
                },
                &mut |px, py, coverage| canvas.blend_pixel(px, py, color, coverage),
            );
            pen += self.font.advance_width(ch, scale);
        }
    }
}

/* ============================
 * Trait
 * ============================ */

/// Caller-facing surface of a writer, independent of the font backend.
pub trait TextDrawer<C: Canvas + ?Sized> {
    fn load_font_file(&mut self, path: &Path) -> Result<(), FontError>;
    fn load_font(&mut self, bytes: Vec<u8>) -> Result<(), FontError>;
    fn set_size(&mut self, size: f32);
    fn draw(
        &self,
        dst: &mut C,
        padding: Padding,
        text: &[&str],
    ) -> Result<DrawReport, DrawError>;
    fn draw_centered(
        &self,
        dst: &mut C,
        padding_left: u32,
        padding_right: u32,
        text: &[&str],
    ) -> Result<DrawReport, DrawError>;
}

impl<F: FontLoader, C: Canvas + ?Sized> TextDrawer<C> for TextWriter<F> {
    fn load_font_file(&mut self, path: &Path) -> Result<(), FontError> {
        self.set_font_path(path)
    }

    fn load_font(&mut self, bytes: Vec<u8>) -> Result<(), FontError> {
        self.set_font_bytes(bytes)
    }

    fn set_size(&mut self, size: f32) {
        TextWriter::set_font_size(self, size);
    }

    fn draw(
        &self,
        dst: &mut C,
        padding: Padding,
        text: &[&str],
    ) -> Result<DrawReport, DrawError> {
        self.draw_lines(dst, padding, text)
    }

    fn draw_centered(
        &self,
        dst: &mut C,
        padding_left: u32,
        padding_right: u32,
        text: &[&str],
    ) -> Result<DrawReport, DrawError> {
        self.draw_lines_centered(dst, padding_left, padding_right, text)
    }
}
