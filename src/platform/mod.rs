pub mod font;
pub mod io;
pub(crate) mod os;
pub mod renderer;
