use ab_glyph::{Font, FontArc};
use canvas_writer::platform::font::default_font_bytes;
use canvas_writer::{
    AbGlyphFont, Fixed, FontLoader, FontdueFont, GlyphProvider, Padding, TextWriter,
    WriterSettings,
};
use image::{Rgba, RgbaImage};

fn system_font() -> Option<Vec<u8>> {
    match default_font_bytes() {
        Ok((path, bytes)) => {
            println!("using {}", path.display());
            Some(bytes)
        }
        Err(e) => {
            eprintln!("skipping system font test: {e}");
            None
        }
    }
}

fn has_ink(img: &RgbaImage) -> bool {
    img.pixels().any(|p| p.0[0] < 200)
}

#[test]
fn ab_glyph_writer_draws_hello() {
    let Some(bytes) = system_font() else { return };
    let w = TextWriter::<AbGlyphFont>::from_font_bytes(bytes, WriterSettings::new(72.0, 20.0))
        .expect("system font parses");

    assert!(w.font().has_glyph('H'));
    let mut img = RgbaImage::from_pixel(200, 40, Rgba([255, 255, 255, 255]));
    let report = w
        .draw_lines(&mut img, Padding::ZERO, &["Hello"])
        .expect("draw should succeed");

    assert_eq!(report.drawn(), 1);
    assert!(report.lines[0].advance.floor() > 0);
    assert!(!report.lines[0].truncated);
    assert!(has_ink(&img));
}

#[test]
fn fontdue_writer_draws_hello() {
    let Some(bytes) = system_font() else { return };
    let w = TextWriter::<FontdueFont>::from_font_bytes(bytes, WriterSettings::new(72.0, 20.0))
        .expect("system font parses");

    let mut img = RgbaImage::from_pixel(200, 40, Rgba([255, 255, 255, 255]));
    w.draw_lines(&mut img, Padding::ZERO, &["Hello"])
        .expect("draw should succeed");
    assert!(has_ink(&img));
}

#[test]
fn backends_roughly_agree_on_advance() {
    let Some(bytes) = system_font() else { return };
    let ab = AbGlyphFont::load(bytes.clone()).expect("ab_glyph parses");
    let fd = FontdueFont::load(bytes).expect("fontdue parses");
    let scale = WriterSettings::new(72.0, 32.0).scale();

    let a = ab.line_advance("The quick brown fox", scale).to_f32();
    let b = fd.line_advance("The quick brown fox", scale).to_f32();
    assert!(a > 0.0 && b > 0.0);
    assert!((a - b).abs() / a < 0.1, "ab_glyph {a} vs fontdue {b}");
}

#[test]
fn long_line_is_truncated_with_real_font() {
    let Some(bytes) = system_font() else { return };
    let w = TextWriter::<AbGlyphFont>::from_font_bytes(bytes, WriterSettings::new(72.0, 16.0))
        .expect("system font parses");

    let line = "This line is far too long to fit into a canvas that is only one hundred pixels wide";
    let mut img = RgbaImage::from_pixel(100, 40, Rgba([255, 255, 255, 255]));
    let report = w
        .draw_lines(&mut img, Padding::ZERO, &[line])
        .expect("draw should succeed");

    let out = &report.lines[0];
    assert!(out.truncated);
    assert!(out.text.ends_with("..."));
    assert!(out.text.len() < line.len());
}

#[test]
fn ab_glyph_advance_is_em_scaled() {
    let Some(bytes) = system_font() else { return };
    let raw = FontArc::try_from_vec(bytes.clone()).expect("ab_glyph parses");
    let upem = raw.units_per_em().expect("font has units per em");
    let font = AbGlyphFont::load(bytes).expect("ab_glyph parses");

    for ch in ['M', 'i', 'W', ' '] {
        let expected = raw.h_advance_unscaled(raw.glyph_id(ch)) * 20.0 / upem;
        let got = font.advance_width(ch, Fixed::from_int(20)).to_f32();
        assert!(
            (got - expected).abs() <= 1.0 / 64.0,
            "{ch:?}: em-scaled advance {expected}, provider returned {got}"
        );
    }
}

#[test]
fn ab_glyph_caps_fit_below_first_baseline() {
    let Some(bytes) = system_font() else { return };
    let w = TextWriter::<AbGlyphFont>::from_font_bytes(bytes, WriterSettings::new(72.0, 20.0))
        .expect("system font parses");

    let mut img = RgbaImage::from_pixel(100, 40, Rgba([255, 255, 255, 255]));
    w.draw_lines(&mut img, Padding::ZERO, &["H"])
        .expect("draw should succeed");

    // キャップハイトは em より小さいので、ベースライン 20 の上に余白が残る
    let first_ink = (0..img.height())
        .find(|&y| (0..img.width()).any(|x| img.get_pixel(x, y).0[0] < 200))
        .expect("H is drawn");
    assert!(first_ink >= 3, "glyph top at row {first_ink}");
    assert!(first_ink < 20);
}
