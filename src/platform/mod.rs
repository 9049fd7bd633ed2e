pub mod font;
pub(crate) mod os;
pub mod renderer;
