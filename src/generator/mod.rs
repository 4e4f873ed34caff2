//! Category + text → title image.

mod category;

pub use category::CategoryMap;

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::engine::bridge::text::GlyphRasterizer;
use crate::engine::layouter::{LayoutStyle, TextBlock};
use crate::engine::renderer::{composite, rasterize_banner};
use crate::error::GenerateError;
use crate::platform::font::load_font;
use crate::platform::io::{LoadedImage, load_image, save_image};
use crate::platform::renderer::text_measurer::FontdueFace;

/// Generates title images from a category background and a title text.
///
/// The face is the only state shared between calls; every layout, banner
/// and background is built fresh per call and dropped at its end.
#[derive(Debug)]
pub struct TitleImageGenerator<F = FontdueFace> {
    directory: PathBuf,
    categories: CategoryMap,
    face: F,
    style: LayoutStyle,
}

impl TitleImageGenerator<FontdueFace> {
    /// Loads `font_name` (or the system default font) at `style.font_size`.
    ///
    /// Fails with [`GenerateError::FontUnavailable`] before any image is read.
    pub fn with_system_font(
        directory: impl Into<PathBuf>,
        categories: CategoryMap,
        font_name: Option<&str>,
        style: LayoutStyle,
    ) -> Result<Self, GenerateError> {
        let face = load_font(font_name, style.font_size)?;
        Ok(Self::new(directory, categories, face, style))
    }
}

impl<F: GlyphRasterizer> TitleImageGenerator<F> {
    pub fn new(
        directory: impl Into<PathBuf>,
        categories: CategoryMap,
        face: F,
        style: LayoutStyle,
    ) -> Self {
        Self {
            directory: directory.into(),
            categories,
            face,
            style,
        }
    }

    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    pub fn style(&self) -> &LayoutStyle {
        &self.style
    }

    pub fn image_path(&self, category: &str) -> Result<PathBuf, GenerateError> {
        self.categories.resolve(&self.directory, category)
    }

    /// Renders the title over the category background and writes it to
    /// `out_path`. Nothing is written unless every earlier stage succeeded.
    pub fn generate(
        &self,
        category: &str,
        text: &str,
        out_path: impl AsRef<Path>,
    ) -> Result<(), GenerateError> {
        let out_path = out_path.as_ref();
        let LoadedImage { image, has_alpha } = self.compose(category, text)?;
        save_image(image, out_path, has_alpha)?;
        log::info!("generated {} ({category})", out_path.display());
        Ok(())
    }

    /// Same pipeline as [`generate`](Self::generate), returning the buffer.
    pub fn render(&self, category: &str, text: &str) -> Result<RgbaImage, GenerateError> {
        self.compose(category, text).map(|loaded| loaded.image)
    }

    fn compose(&self, category: &str, text: &str) -> Result<LoadedImage, GenerateError> {
        let image_path = self.image_path(category)?;
        let mut background = load_image(&image_path)?;

        let block = TextBlock::layout(text, &self.style, &self.face);
        let banner = rasterize_banner(
            background.image.width(),
            &block,
            self.style.padding_y,
            self.style.banner_color,
            &self.face,
        );
        let offset_y = composite(&mut background.image, &banner);
        log::debug!(
            target: "TitleImageGenerator::compose",
            "{category}: block {}x{} banner {}x{} at y={offset_y}",
            block.width(),
            block.height(),
            banner.width(),
            banner.height()
        );
        Ok(background)
    }
}
