use anyhow::{Context, Result, bail};
use canvas_writer::platform::font::default_font_bytes;
use canvas_writer::{AbGlyphFont, Color, Padding, TextDrawer, TextWriter, WriterSettings};
use image::{Rgba, RgbaImage};
use std::env;
use std::path::PathBuf;

const USAGE: &str = "usage: canvas_writer [--center] [--size PT] [--dpi DPI] [--canvas WxH] [--padding PX] [--font PATH] <out.png> <line>...";

struct Args {
    center: bool,
    size: f32,
    dpi: f32,
    canvas: (u32, u32),
    padding: u32,
    font: Option<PathBuf>,
    out: PathBuf,
    lines: Vec<String>,
}

fn parse_canvas(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("canvas must be WxH, got {s:?}"))?;
    Ok((w.parse::<u32>()?, h.parse::<u32>()?))
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut center = false;
    let mut size = 20.0;
    let mut dpi = 72.0;
    let mut canvas = (640, 360);
    let mut padding = 16;
    let mut font = None;
    let mut positional = Vec::new();

    while let Some(arg) = it.next() {
        let mut value = |name: &str| it.next().with_context(|| format!("{name} needs a value"));
        match arg.as_str() {
            "--center" => center = true,
            "--size" => size = value("--size")?.parse::<f32>().context("--size")?,
            "--dpi" => dpi = value("--dpi")?.parse::<f32>().context("--dpi")?,
            "--canvas" => canvas = parse_canvas(&value("--canvas")?)?,
            "--padding" => padding = value("--padding")?.parse::<u32>().context("--padding")?,
            "--font" => font = Some(PathBuf::from(value("--font")?)),
            "-h" | "--help" => bail!(USAGE),
            other => positional.push(other.to_string()),
        }
    }

    if positional.is_empty() {
        bail!(USAGE);
    }
    let out = PathBuf::from(positional.remove(0));
    Ok(Args {
        center,
        size,
        dpi,
        canvas,
        padding,
        font,
        out,
        lines: positional,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args(env::args().skip(1))?;

    let (font_path, bytes) = match &args.font {
        Some(p) => (
            p.clone(),
            std::fs::read(p).with_context(|| format!("failed to read font {}", p.display()))?,
        ),
        None => default_font_bytes()?,
    };

    let settings = WriterSettings::new(args.dpi, args.size).with_color(Color::BLACK);
    let drawer: Box<dyn TextDrawer<RgbaImage>> = Box::new(
        TextWriter::<AbGlyphFont>::from_font_bytes(bytes, settings)
            .with_context(|| format!("failed to load font {}", font_path.display()))?,
    );

    let (w, h) = args.canvas;
    let mut img = RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]));
    let lines: Vec<&str> = args.lines.iter().map(String::as_str).collect();

    let report = if args.center {
        drawer.draw_centered(&mut img, args.padding, args.padding, &lines)?
    } else {
        let p = args.padding;
        drawer.draw(&mut img, Padding::new(p, p, p, p), &lines)?
    };

    log::info!(
        "drew {} of {} lines ({} truncated)",
        report.drawn(),
        lines.len(),
        report.truncated()
    );
    if report.skipped > 0 {
        eprintln!("warning: {} lines did not fit", report.skipped);
    }

    img.save(&args.out)
        .with_context(|| format!("failed to save {}", args.out.display()))?;
    Ok(())
}
