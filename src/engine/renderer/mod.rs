pub mod canvas;
pub mod types;

pub use canvas::Canvas;
pub use types::{Color, Padding};
