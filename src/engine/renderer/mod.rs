//! Draw pass: banner allocation, text drawing and compositing.

pub mod banner;
pub mod compose;

pub use banner::{Banner, rasterize_banner};
pub use compose::composite;
