mod renderer;
pub use renderer::{render, ESCAPE};
