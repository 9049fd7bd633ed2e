//! Linux のシステムフォント取得
//!
//! ディストリごとに配置が違うので、よくある場所を並べる。
//! 横書きのラテン文字が出れば十分なので Sans 系を優先する。

use anyhow::Result;
use std::path::PathBuf;

const SHARE_DIRS: &[&str] = &["/usr/share/fonts", "/usr/local/share/fonts"];

const RELATIVE: &[&str] = &[
    // Debian / Ubuntu
    "truetype/dejavu/DejaVuSans.ttf",
    "truetype/liberation/LiberationSans-Regular.ttf",
    "truetype/noto/NotoSans-Regular.ttf",
    "truetype/freefont/FreeSans.ttf",
    // Fedora / Arch
    "dejavu-sans-fonts/DejaVuSans.ttf",
    "TTF/DejaVuSans.ttf",
    "noto/NotoSans-Regular.ttf",
    "liberation-sans/LiberationSans-Regular.ttf",
];

pub fn system_font_candidates() -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for dir in SHARE_DIRS {
        for rel in RELATIVE {
            out.push(PathBuf::from(dir).join(rel));
        }
    }
    // ユーザーフォント
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        out.push(home.join(".local/share/fonts/DejaVuSans.ttf"));
        out.push(home.join(".fonts/DejaVuSans.ttf"));
    }
    Ok(out)
}
