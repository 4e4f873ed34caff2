//! Measurement pass: text → phrases → lines → block.
//!
//! Nothing here draws. All sizes are final once a [`TextBlock`] exists.

pub mod block;
pub mod line;
pub mod phrase;
pub mod types;

pub use block::TextBlock;
pub use line::Line;
pub use phrase::{Phrase, segment_line};
pub use types::{Color, Emphasis, LayoutStyle};
