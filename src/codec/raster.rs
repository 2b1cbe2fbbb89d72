use std::io::Cursor;

use crate::{
    foundation::{
        error::{RasterError, RasterResult},
        math::channel_to_u8,
    },
    model::{ImageGrid, Pixel},
};

/// Decode a PNG/JPEG/BMP container through the `image` crate.
///
/// Alpha is kept; the declared max is the largest color channel present.
pub fn decode_raster(bytes: &[u8], format: image::ImageFormat) -> RasterResult<ImageGrid> {
    let dyn_img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| RasterError::decode(format!("{format:?}: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let pixels = rgba
        .pixels()
        .map(|px| {
            let [r, g, b, a] = px.0;
            Pixel::from_clamped(i32::from(a), i32::from(r), i32::from(g), i32::from(b))
        })
        .collect::<Vec<_>>();
    let max = pixels.iter().map(|p| p.value()).max().unwrap_or(0);
    ImageGrid::new(width as usize, height as usize, max, pixels)
        .map_err(|e| RasterError::decode(e.to_string()))
}

/// Encode to a PNG/JPEG/BMP container. PNG keeps alpha; other formats write RGB8.
pub fn encode_raster(grid: &ImageGrid, format: image::ImageFormat) -> RasterResult<Vec<u8>> {
    let width = u32::try_from(grid.width())
        .map_err(|_| RasterError::encode("image width exceeds u32"))?;
    let height = u32::try_from(grid.height())
        .map_err(|_| RasterError::encode("image height exceeds u32"))?;

    let built = if format == image::ImageFormat::Png {
        let raw = grid
            .pixels()
            .iter()
            .flat_map(|p| [p.red(), p.green(), p.blue(), p.alpha()].map(channel_to_u8))
            .collect();
        image::RgbaImage::from_raw(width, height, raw)
            .map(image::DynamicImage::ImageRgba8)
    } else {
        let raw = grid
            .pixels()
            .iter()
            .flat_map(|p| [p.red(), p.green(), p.blue()].map(channel_to_u8))
            .collect();
        image::RgbImage::from_raw(width, height, raw).map(image::DynamicImage::ImageRgb8)
    };
    let dyn_img = built
        .ok_or_else(|| RasterError::encode("pixel buffer does not match image dimensions"))?;

    let mut buf = Vec::new();
    dyn_img
        .write_to(&mut Cursor::new(&mut buf), format)
        .map_err(|e| RasterError::encode(format!("{format:?}: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/raster.rs"]
mod tests;
