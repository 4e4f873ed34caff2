//! システムフォント取得の Facade
//!
//! Resolution order for [`load_font`]:
//!
//! 1. `TITLE_IMAGE_FONT` (a font file path) when set and readable
//! 2. `name` as a file path
//! 3. a font file under the system font dirs whose stem equals `name`
//! 4. with no `name`, the first readable per-OS candidate

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::platform::renderer::text_measurer::FontdueFace;

pub const FONT_ENV_VAR: &str = "TITLE_IMAGE_FONT";

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

#[allow(unreachable_code)]
pub fn system_font_candidates() -> Vec<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        return crate::platform::os::linux::font::system_font_candidates();
    }
    #[cfg(target_os = "macos")]
    {
        return crate::platform::os::macos::font::system_font_candidates();
    }
    #[cfg(target_os = "windows")]
    {
        return crate::platform::os::windows::font::system_font_candidates();
    }

    Vec::new()
}

#[allow(unreachable_code)]
pub fn system_font_dirs() -> Vec<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        return crate::platform::os::linux::font::system_font_dirs();
    }
    #[cfg(target_os = "macos")]
    {
        return crate::platform::os::macos::font::system_font_dirs();
    }
    #[cfg(target_os = "windows")]
    {
        return crate::platform::os::windows::font::system_font_dirs();
    }

    Vec::new()
}

/// Loads a font by name (or the system default) at `size_px`.
pub fn load_font(name: Option<&str>, size_px: u32) -> Result<FontdueFace, GenerateError> {
    let label = name.unwrap_or("<system default>").to_string();

    // もし環境変数あるならそっちのフォントを優先
    if let Some(p) = std::env::var_os(FONT_ENV_VAR) {
        let path = PathBuf::from(p);
        match fs::read(&path) {
            Ok(bytes) => return parse(&path, bytes, size_px),
            Err(e) => log::warn!("{FONT_ENV_VAR}={} is unreadable: {e}", path.display()),
        }
    }

    let path = match name {
        Some(name) => resolve_named(name),
        None => first_existing(system_font_candidates()),
    }
    .ok_or_else(|| GenerateError::FontUnavailable(label.clone()))?;

    let bytes = fs::read(&path).map_err(|e| {
        log::warn!("font {} is unreadable: {e}", path.display());
        GenerateError::FontUnavailable(label)
    })?;
    parse(&path, bytes, size_px)
}

/// First candidate that is a file; every skipped one is logged.
fn first_existing(candidates: Vec<PathBuf>) -> Option<PathBuf> {
    let found = candidates.into_iter().find(|p| {
        let exists = p.is_file();
        if !exists {
            log::debug!(target: "font", "skipping missing font candidate {}", p.display());
        }
        exists
    });
    if found.is_none() {
        log::warn!("no system font candidate found");
    }
    found
}

fn parse(path: &Path, bytes: Vec<u8>, size_px: u32) -> Result<FontdueFace, GenerateError> {
    log::debug!(target: "font", "loading {} at {size_px}px", path.display());
    FontdueFace::from_bytes(bytes, size_px)
        .map_err(|e| GenerateError::FontUnavailable(format!("{} ({e})", path.display())))
}

/// Finds the font file for `name`: a direct path, or a file in the system
/// font dirs whose stem matches case-insensitively.
pub fn resolve_named(name: &str) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }
    system_font_dirs()
        .iter()
        .find_map(|dir| find_by_stem(dir, name))
}

fn find_by_stem(dir: &Path, name: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        // symlink は辿らない
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            subdirs.push(path);
        } else if is_font_file(&path)
            && path
                .file_stem()
                .and_then(OsStr::to_str)
                .is_some_and(|stem| stem.eq_ignore_ascii_case(name))
        {
            return Some(path);
        }
    }
    subdirs.iter().find_map(|d| find_by_stem(d, name))
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| FONT_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_font_by_stem_in_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("truetype").join("demo");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("HGRPP1.TTC"), b"not really a font").unwrap();
        fs::write(nested.join("HGRPP1.txt"), b"").unwrap();

        let found = find_by_stem(dir.path(), "hgrpp1").unwrap();
        assert_eq!(found.file_name().unwrap(), "HGRPP1.TTC");
        assert!(find_by_stem(dir.path(), "missing").is_none());
    }

    #[test]
    fn first_existing_skips_missing_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.ttf");
        fs::write(&present, b"x").unwrap();
        let candidates = vec![
            dir.path().join("missing.ttf"),
            dir.path().to_path_buf(),
            present.clone(),
        ];
        assert_eq!(first_existing(candidates), Some(present));
        assert_eq!(first_existing(vec![dir.path().join("nope.ttc")]), None);
    }

    #[test]
    fn named_path_resolves_directly() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("any.bin");
        fs::write(&file, b"x").unwrap();
        assert_eq!(resolve_named(file.to_str().unwrap()), Some(file));
    }

    #[test]
    fn garbage_font_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("broken.ttf");
        fs::write(&file, b"definitely not a font").unwrap();
        let err = parse(&file, fs::read(&file).unwrap(), 20).unwrap_err();
        assert!(matches!(err, GenerateError::FontUnavailable(_)));
    }
}
