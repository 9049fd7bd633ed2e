//! 描画先のラスタ面

use image::{GrayImage, Luma, Rgba, RgbaImage};

use super::types::Color;

/// A mutable raster surface owned by the caller.
///
/// The writer only blends coverage into it; it never resizes the surface.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Blends `color` at `coverage` (0.0..=1.0) into one pixel.
    /// Out-of-bounds coordinates are ignored.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32);
}

fn in_bounds(x: i32, y: i32, width: u32, height: u32) -> bool {
    x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height
}

fn mix(dst: u8, src: f32, alpha: f32) -> u8 {
    let d = dst as f32 / 255.0;
    let v = d * (1.0 - alpha) + src * alpha;
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Canvas for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        let (w, h) = self.dimensions();
        if !in_bounds(x, y, w, h) {
            return;
        }
        let alpha = (coverage * color.a).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let Rgba([r, g, b, a]) = *self.get_pixel(x as u32, y as u32);
        let out_a = (a as f32 / 255.0) * (1.0 - alpha) + alpha;
        self.put_pixel(
            x as u32,
            y as u32,
            Rgba([
                mix(r, color.r, alpha),
                mix(g, color.g, alpha),
                mix(b, color.b, alpha),
                (out_a.clamp(0.0, 1.0) * 255.0).round() as u8,
            ]),
        );
    }
}

impl Canvas for GrayImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        let (w, h) = self.dimensions();
        if !in_bounds(x, y, w, h) {
            return;
        }
        let alpha = (coverage * color.a).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let Luma([l]) = *self.get_pixel(x as u32, y as u32);
        self.put_pixel(x as u32, y as u32, Luma([mix(l, color.luma(), alpha)]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_blend_full_coverage() {
        let mut img = GrayImage::from_pixel(4, 4, Luma([255]));
        img.blend_pixel(1, 2, Color::BLACK, 1.0);
        assert_eq!(img.get_pixel(1, 2).0, [0]);
        assert_eq!(img.get_pixel(0, 0).0, [255]);
    }

    #[test]
    fn rgba_blend_half_coverage() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        img.blend_pixel(0, 0, Color::BLACK, 0.5);
        let px = img.get_pixel(0, 0).0;
        assert!(px[0] == 127 || px[0] == 128, "got {px:?}");
        assert_eq!(px[3], 255);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut img = GrayImage::from_pixel(2, 2, Luma([255]));
        img.blend_pixel(-1, 0, Color::BLACK, 1.0);
        img.blend_pixel(0, 2, Color::BLACK, 1.0);
        assert!(img.pixels().all(|p| p.0 == [255]));
    }
}
