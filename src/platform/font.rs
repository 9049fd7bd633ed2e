//! システムフォント取得の Facade
//!
//! `CANVAS_WRITER_FONT` が設定されていればそれを最優先し、
//! なければ OS ごとの候補を順に試す。

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::platform::os;

/// フォントパスを上書きする環境変数
pub const FONT_ENV: &str = "CANVAS_WRITER_FONT";

#[allow(unreachable_code)]
pub fn system_font_candidates() -> Result<Vec<PathBuf>> {
    #[cfg(target_os = "windows")]
    {
        return os::windows::font::system_font_candidates();
    }
    #[cfg(target_os = "macos")]
    {
        return os::macos::font::system_font_candidates();
    }
    #[cfg(target_os = "linux")]
    {
        return os::linux::font::system_font_candidates();
    }

    anyhow::bail!("system font is not supported on this OS yet");
}

/// 最初に読めたフォントのパスとバイト列を返す
pub fn default_font_bytes() -> Result<(PathBuf, Vec<u8>)> {
    if let Ok(p) = env::var(FONT_ENV) {
        let path = PathBuf::from(p);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("{FONT_ENV} points to unreadable font {}", path.display()))?;
        return Ok((path, bytes));
    }

    for p in system_font_candidates()? {
        match std::fs::read(&p) {
            Ok(bytes) => {
                log::info!(target: "platform::font", "using system font {}", p.display());
                return Ok((p, bytes));
            }
            Err(e) => log::debug!(target: "platform::font", "skip {}: {e}", p.display()),
        }
    }

    anyhow::bail!("no system font found, set {FONT_ENV}");
}
