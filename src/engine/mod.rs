pub mod bridge;
pub mod renderer;
pub mod writer;
