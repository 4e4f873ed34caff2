//! Image file loading and saving.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::GenerateError;

/// A decoded background.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub image: RgbaImage,
    /// Whether the source file carried an alpha channel.
    pub has_alpha: bool,
}

/// Decodes the image at `path` into RGBA.
pub fn load_image(path: &Path) -> Result<LoadedImage, GenerateError> {
    let decoded = image::open(path).map_err(|source| GenerateError::BackgroundImageMissing {
        path: path.to_path_buf(),
        source,
    })?;
    let has_alpha = decoded.color().has_alpha();
    log::debug!(
        target: "io::load_image",
        "{} {}x{} alpha={}",
        path.display(),
        decoded.width(),
        decoded.height(),
        has_alpha
    );
    Ok(LoadedImage {
        image: decoded.into_rgba8(),
        has_alpha,
    })
}

/// Encodes `image` and writes it to `path`.
///
/// The format follows the extension (PNG when unknown). The bytes are
/// encoded in memory and written through a sibling temporary file, so a
/// failure never leaves a half written image at `path`.
pub fn save_image(image: RgbaImage, path: &Path, keep_alpha: bool) -> Result<(), GenerateError> {
    let write_err = |source: std::io::Error| GenerateError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let keep_alpha = keep_alpha && supports_alpha(format);
    let image = if keep_alpha {
        DynamicImage::ImageRgba8(image)
    } else {
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(image).into_rgb8())
    };

    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format)
        .map_err(|e| write_err(std::io::Error::other(e)))?;

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, buf.get_ref()) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    Ok(())
}

fn supports_alpha(format: ImageFormat) -> bool {
    format != ImageFormat::Jpeg
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}
