//! macOS のシステムフォント取得

use anyhow::Result;
use std::path::PathBuf;

/// macOS のシステムフォント候補を返す
///
/// .ttc は先頭フェイスが使われる
pub fn system_font_candidates() -> Result<Vec<PathBuf>> {
    Ok(vec![
        PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"),
        PathBuf::from("/Library/Fonts/Arial Unicode.ttf"),
        PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
        PathBuf::from("/System/Library/Fonts/Geneva.ttf"),
        PathBuf::from("/System/Library/Fonts/SFNS.ttf"),
    ])
}
