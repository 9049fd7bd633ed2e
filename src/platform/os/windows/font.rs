//! Windows のシステムフォント取得

use anyhow::Result;
use std::path::PathBuf;

/// システムフォント候補を返す
///
/// `%WINDIR%` が無い環境では C:\Windows を仮定する
pub fn system_font_candidates() -> Result<Vec<PathBuf>> {
    let windir = std::env::var_os("WINDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\Windows"));
    let fonts = windir.join("Fonts");
    Ok(["arial.ttf", "segoeui.ttf", "verdana.ttf", "tahoma.ttf", "calibri.ttf"]
        .iter()
        .map(|f| fonts.join(f))
        .collect())
}
