//! rasterkit is a deterministic raster image transformation engine.
//!
//! Images are [`ImageGrid`]s: fixed-size, row-major grids of immutable [`Pixel`]s.
//! Every transformation reads a grid and returns a new one; nothing is edited in place.
//!
//! # Layers
//!
//! 1. **Model**: [`Pixel`], [`Kernel`], [`ColorMatrix`], [`ImageGrid`]
//! 2. **Ops**: convolution, color matrices, mosaic clustering, histograms
//! 3. **Codec**: plain-text `P3` grids plus PNG/JPEG/BMP through the `image` crate
//! 4. **Manager**: a name -> image store with a fixed registry of named operations
//! 5. **Session**: a line-oriented command interpreter on top of the manager
//!
//! Randomness is confined to mosaic seed placement, which always takes an explicit
//! [`rand::Rng`], so seeded runs are reproducible.
#![forbid(unsafe_code)]

mod codec;
mod foundation;
mod manager;
mod model;
mod ops;
mod session;

pub use codec::{
    ImageFormat, decode, decode_ppm, decode_raster, encode, encode_ppm, encode_raster,
    format_for_load, format_for_save,
};
pub use foundation::error::{RasterError, RasterResult};
pub use manager::{
    ImageManager, ImageStore, ManagerOpts, Operation, OperationRegistry, OperationSpec,
    SharedImageManager,
};
pub use model::{ColorMatrix, Component, FlipDirection, ImageGrid, Kernel, Pixel};
pub use ops::{Histogram, apply_matrix, convolve, mosaic, mosaic_from_seeds, pick_seeds};
pub use session::{Command, Session, SessionSummary};
