//! Title image generator.
//!
//! Lays out a multi-line title (with `$`-delimited emphasis) on a translucent
//! banner and composites it over a category background.
//!
//! ```text
//! text → layouter (Phrase / Line / TextBlock) → renderer::banner → renderer::compose → PNG
//! ```

pub mod engine;
pub mod error;
pub mod generator;
pub mod platform;

pub use error::GenerateError;
pub use generator::{CategoryMap, TitleImageGenerator};
