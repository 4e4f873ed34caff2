//! macOS のシステムフォント取得

use std::path::PathBuf;

/// macOS のシステムフォント候補を返す
pub fn system_font_candidates() -> Vec<PathBuf> {
    vec![
        // 日本語（ヒラギノ）
        PathBuf::from("/System/Library/Fonts/ヒラギノ角ゴシック W6.ttc"),
        PathBuf::from("/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc"),
        // San Francisco（macOS 標準）
        PathBuf::from("/System/Library/Fonts/SFNS.ttf"),
        // fallback
        PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
        PathBuf::from("/System/Library/Fonts/AppleSDGothicNeo.ttc"),
    ]
}

pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("/Library/Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(PathBuf::from(home).join("Library/Fonts"));
    }
    dirs
}
