use canvas_writer::{
    FallbackGlyphs, Fixed, FontError, Padding, TextDrawer, TextWriter, WriterSettings,
};
use image::{GrayImage, Luma};
use std::path::PathBuf;

fn settings() -> WriterSettings {
    WriterSettings::new(72.0, 20.0)
}

fn temp_font(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "canvas_writer_{}_{}.font",
        std::process::id(),
        name
    ));
    std::fs::write(&path, contents).expect("write temp font");
    path
}

#[test]
fn malformed_bytes_never_build_a_writer() {
    let res = TextWriter::<FallbackGlyphs>::from_font_bytes(b"not a ratio".to_vec(), settings());
    assert!(matches!(res, Err(FontError::Parse(_))));
}

#[test]
fn malformed_bytes_keep_previous_font() {
    let mut w = TextWriter::<FallbackGlyphs>::from_font_bytes(b"0.5".to_vec(), settings())
        .expect("valid descriptor");

    let err = w.set_font_bytes(b"garbage".to_vec()).unwrap_err();
    assert!(matches!(err, FontError::Parse(_)));
    assert!((w.font().avg_char_width_ratio - 0.5).abs() < 1e-6);

    // 以前のフォントでそのまま描ける
    let mut img = GrayImage::from_pixel(100, 40, Luma([255]));
    let report = w
        .draw_lines(&mut img, Padding::ZERO, &["abcd"])
        .expect("still ready");
    assert_eq!(report.lines[0].advance, Fixed::from_int(40));
}

#[test]
fn unreadable_path_is_an_io_error() {
    let missing = std::env::temp_dir().join("canvas_writer_definitely_missing.font");
    let res = TextWriter::<FallbackGlyphs>::from_font_path(&missing, settings());
    assert!(matches!(res, Err(FontError::Io(_))));

    let mut w = TextWriter::new(FallbackGlyphs::new(0.75), settings());
    let err = w.set_font_path(&missing).unwrap_err();
    assert!(matches!(err, FontError::Io(_)));
    assert!(std::error::Error::source(&err).is_some());
    assert!((w.font().avg_char_width_ratio - 0.75).abs() < 1e-6);
}

#[test]
fn new_font_replaces_old_one() {
    let path = temp_font("quarter", b"0.25\n");
    let mut w = TextWriter::new(FallbackGlyphs::default(), settings());

    w.set_font_path(&path).expect("descriptor file loads");
    let _ = std::fs::remove_file(&path);

    let mut img = GrayImage::from_pixel(100, 40, Luma([255]));
    let report = w
        .draw_lines(&mut img, Padding::ZERO, &["abcd"])
        .expect("draw should succeed");
    // 4 文字 x 20px x 0.25
    assert_eq!(report.lines[0].advance, Fixed::from_int(20));
}

#[test]
fn set_font_swaps_provider() {
    let mut w = TextWriter::new(FallbackGlyphs::default(), settings());
    w.set_font(FallbackGlyphs::new(1.0));

    let mut img = GrayImage::from_pixel(100, 40, Luma([255]));
    let report = w
        .draw_lines(&mut img, Padding::ZERO, &["ab"])
        .expect("draw should succeed");
    assert_eq!(report.lines[0].advance, Fixed::from_int(40));
}

#[test]
fn font_size_changes_following_draws() {
    let mut w = TextWriter::new(FallbackGlyphs::default(), settings());
    assert_eq!(w.line_height(), Fixed::from_int(30));

    w.set_font_size(40.0);
    assert_eq!(w.settings().font_size, 40.0);
    assert_eq!(w.line_height(), Fixed::from_int(60));

    let mut img = GrayImage::from_pixel(200, 100, Luma([255]));
    let report = w
        .draw_lines(&mut img, Padding::ZERO, &["a", "b", "c"])
        .expect("draw should succeed");
    // 40 → 100 は 100 以下、160 で止まる
    assert_eq!(report.drawn(), 2);
    assert_eq!(report.lines[0].advance, Fixed::from_int(20));
}

#[test]
fn dpi_is_taken_from_settings() {
    let w = TextWriter::new(FallbackGlyphs::default(), WriterSettings::new(144.0, 10.0));
    let mut img = GrayImage::from_pixel(100, 100, Luma([255]));

    let report = w
        .draw_lines(&mut img, Padding::ZERO, &["ab"])
        .expect("draw should succeed");
    // 10pt @144dpi = 20px
    assert_eq!(report.lines[0].advance, Fixed::from_int(20));
    assert_eq!(w.line_height(), Fixed::from_int(30));
}

#[test]
fn drawer_trait_object() {
    let mut drawer: Box<dyn TextDrawer<GrayImage>> =
        Box::new(TextWriter::new(FallbackGlyphs::default(), settings()));

    assert!(drawer.load_font(b"nope".to_vec()).is_err());
    drawer.load_font(b"0.5".to_vec()).expect("valid descriptor");
    drawer.set_size(20.0);

    let mut img = GrayImage::from_pixel(100, 40, Luma([255]));
    let report = drawer
        .draw(&mut img, Padding::ZERO, &["Hello"])
        .expect("draw should succeed");
    assert_eq!(report.drawn(), 1);

    let mut img = GrayImage::from_pixel(100, 40, Luma([255]));
    let report = drawer
        .draw_centered(&mut img, 0, 0, &["Hello"])
        .expect("draw should succeed");
    assert_eq!(report.drawn(), 1);

    let missing = std::env::temp_dir().join("canvas_writer_missing_for_trait.font");
    assert!(matches!(
        drawer.load_font_file(&missing),
        Err(FontError::Io(_))
    ));
}
