pub mod color;
pub mod convolve;
pub mod histogram;
pub mod mosaic;

pub use color::apply_matrix;
pub use convolve::convolve;
pub use histogram::Histogram;
pub use mosaic::{mosaic, mosaic_from_seeds, pick_seeds};
