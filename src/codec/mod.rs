//! Load/save boundary: container bytes in, [`ImageGrid`] out, and back.

use std::{fmt, path::Path};

use crate::{
    foundation::error::{RasterError, RasterResult},
    model::ImageGrid,
};

pub mod ppm;
pub mod raster;

pub use ppm::{decode_ppm, encode_ppm};
pub use raster::{decode_raster, encode_raster};

/// File encodings understood by the load/save boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Ppm,
    Png,
    Jpeg,
    Bmp,
}

impl ImageFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ppm" => Some(Self::Ppm),
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    fn container(self) -> Option<image::ImageFormat> {
        match self {
            Self::Ppm => None,
            Self::Png => Some(image::ImageFormat::Png),
            Self::Jpeg => Some(image::ImageFormat::Jpeg),
            Self::Bmp => Some(image::ImageFormat::Bmp),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ppm => "ppm",
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Bmp => "bmp",
        })
    }
}

pub fn decode(bytes: &[u8], format: ImageFormat) -> RasterResult<ImageGrid> {
    match format.container() {
        None => decode_ppm(bytes),
        Some(container) => decode_raster(bytes, container),
    }
}

pub fn encode(grid: &ImageGrid, format: ImageFormat) -> RasterResult<Vec<u8>> {
    match format.container() {
        None => encode_ppm(grid),
        Some(container) => encode_raster(grid, container),
    }
}

/// Format for a load path; unknown extensions are a decode failure.
pub fn format_for_load(path: &Path) -> RasterResult<ImageFormat> {
    ImageFormat::from_path(path).ok_or_else(|| {
        RasterError::decode(format!("unsupported file extension: '{}'", path.display()))
    })
}

/// Format for a save path; unknown extensions are an encode failure.
pub fn format_for_save(path: &Path) -> RasterResult<ImageFormat> {
    ImageFormat::from_path(path).ok_or_else(|| {
        RasterError::encode(format!("unsupported file extension: '{}'", path.display()))
    })
}
