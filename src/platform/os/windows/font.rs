//! Windows のシステムフォント取得

use std::path::PathBuf;

/// システムフォント候補を返す
pub fn system_font_candidates() -> Vec<PathBuf> {
    vec![
        // HG創英角ポップ体 (既定のタイトルフォント)
        PathBuf::from(r"C:\Windows\Fonts\HGRPP1.TTC"),
        // 日本語
        PathBuf::from(r"C:\Windows\Fonts\meiryob.ttc"),
        PathBuf::from(r"C:\Windows\Fonts\meiryo.ttc"),
        PathBuf::from(r"C:\Windows\Fonts\msgothic.ttc"),
        // fallback
        PathBuf::from(r"C:\Windows\Fonts\segoeui.ttf"),
        PathBuf::from(r"C:\Windows\Fonts\arial.ttf"),
    ]
}

pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from(r"C:\Windows\Fonts")];
    if let Some(local) = std::env::var_os("LOCALAPPDATA") {
        dirs.push(PathBuf::from(local).join(r"Microsoft\Windows\Fonts"));
    }
    dirs
}
