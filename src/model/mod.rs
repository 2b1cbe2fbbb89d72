pub mod color_matrix;
pub mod grid;
pub mod kernel;
pub mod pixel;

pub use color_matrix::ColorMatrix;
pub use grid::{FlipDirection, ImageGrid};
pub use kernel::Kernel;
pub use pixel::{Component, Pixel};
