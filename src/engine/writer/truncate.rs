//! Horizontal truncation of lines that overflow the usable width.

use super::fixed::Fixed;
use crate::engine::bridge::text::GlyphProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Assume every glyph is as wide as the line's mean advance and cut the
    /// estimated number of excess characters in one step. The shortened line
    /// is not measured again and the ellipsis width is not accounted for, so
    /// the result may still overflow or leave slack by a few characters.
    #[default]
    MeanWidth,
    /// Drop trailing characters one by one until `prefix + ellipsis` fits.
    Measured,
}

/// Number of characters the mean-width heuristic removes from a line.
///
/// `advance` is the measured width of the line, `usable` the width available
/// to it. At least one character goes whenever the line overflows, never more
/// than the line holds.
pub fn chars_to_remove(advance: Fixed, usable: Fixed, char_count: usize) -> usize {
    if char_count == 0 {
        return 0;
    }
    let overflow = advance - usable;
    let mean_char_width = advance.ceil() / char_count as i32;
    if mean_char_width <= 0 {
        return char_count;
    }
    let n = overflow.floor() / mean_char_width;
    (n.max(1) as usize).min(char_count)
}

fn prefix(line: &str, keep: usize) -> &str {
    match line.char_indices().nth(keep) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

/// Shortens an overflowing line and appends `ellipsis`.
pub fn truncate_line<F: GlyphProvider + ?Sized>(
    font: &F,
    line: &str,
    advance: Fixed,
    usable: Fixed,
    scale: Fixed,
    ellipsis: &str,
    policy: TruncationPolicy,
) -> String {
    let count = line.chars().count();
    match policy {
        TruncationPolicy::MeanWidth => {
            let remove = chars_to_remove(advance, usable, count);
            format!("{}{}", prefix(line, count - remove), ellipsis)
        }
        TruncationPolicy::Measured => {
            let tail = font.line_advance(ellipsis, scale);
            let mut keep = count;
            let mut width = advance;
            let mut chars: Vec<char> = line.chars().collect();
            while keep > 0 && width + tail > usable {
                if let Some(ch) = chars.pop()
                    && !ch.is_control()
                {
                    width -= font.advance_width(ch, scale);
                }
                keep -= 1;
            }
            format!("{}{}", prefix(line, keep), ellipsis)
        }
    }
}
