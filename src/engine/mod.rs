pub mod bridge;
pub mod layouter;
pub mod renderer;
