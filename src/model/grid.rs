use std::str::FromStr;

use rand::Rng;

use crate::{
    foundation::{
        error::{RasterError, RasterResult},
        math::{clamp_channel, saturating_channel_add},
    },
    model::{ColorMatrix, Component, Kernel, Pixel},
    ops,
};

/// Mirror axis for [`ImageGrid::flip`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipDirection {
    /// Mirror columns: `col -> width - 1 - col`.
    Horizontal,
    /// Mirror rows: `row -> height - 1 - row`.
    Vertical,
}

impl FromStr for FlipDirection {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(RasterError::invalid_argument(format!(
                "unknown flip direction '{other}'"
            ))),
        }
    }
}

/// Fixed-size, row-major grid of [`Pixel`]s.
///
/// Every operation allocates and returns a fresh grid; `self` is never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageGrid {
    width: usize,
    height: usize,
    max_channel_value: i32,
    pixels: Vec<Pixel>,
}

impl ImageGrid {
    /// Build a grid from row-major pixels.
    ///
    /// `width` and `height` must be positive, `max_channel_value` non-negative, and
    /// `pixels.len() == width * height`.
    pub fn new(
        width: usize,
        height: usize,
        max_channel_value: i32,
        pixels: Vec<Pixel>,
    ) -> RasterResult<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::invalid_argument(format!(
                "image dimensions must be positive, got {width}x{height}"
            )));
        }
        if max_channel_value < 0 {
            return Err(RasterError::invalid_argument(
                "max channel value must be non-negative",
            ));
        }
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| RasterError::invalid_argument("image size overflow"))?;
        if pixels.len() != expected {
            return Err(RasterError::invalid_argument(format!(
                "expected {expected} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            max_channel_value,
            pixels,
        })
    }

    /// Build a grid from explicit rows; every row must have the same length.
    pub fn from_rows(max_channel_value: i32, rows: Vec<Vec<Pixel>>) -> RasterResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return Err(RasterError::invalid_argument("image rows differ in length"));
        }
        Self::new(
            width,
            height,
            max_channel_value,
            rows.into_iter().flatten().collect(),
        )
    }

    /// Uniform grid whose declared max is the pixel's largest color channel.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> RasterResult<Self> {
        let len = width
            .checked_mul(height)
            .ok_or_else(|| RasterError::invalid_argument("image size overflow"))?;
        Self::new(width, height, pixel.value(), vec![pixel; len])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Declared channel maximum; informational, used by the PPM header.
    pub fn max_channel_value(&self) -> i32 {
        self.max_channel_value
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Row-major pixel storage.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        self.pixels.chunks_exact(self.width)
    }

    pub fn pixel(&self, row: usize, col: usize) -> RasterResult<Pixel> {
        if row >= self.height || col >= self.width {
            return Err(RasterError::out_of_bounds(format!(
                "pixel ({row}, {col}) outside {}x{} image",
                self.height, self.width
            )));
        }
        Ok(self.pixels[row * self.width + col])
    }

    pub(crate) fn storage(&self) -> RasterResult<&[Pixel]> {
        if self.pixels.is_empty() {
            return Err(RasterError::uninitialized("image has no pixel storage"));
        }
        Ok(&self.pixels)
    }

    /// Same dimensions and declared max, new pixels. Callers guarantee the length.
    pub(crate) fn with_pixels(&self, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Self {
            width: self.width,
            height: self.height,
            max_channel_value: self.max_channel_value,
            pixels,
        }
    }

    /// Largest color channel actually present.
    pub fn max_color_channel(&self) -> i32 {
        self.pixels.iter().map(|p| p.value()).max().unwrap_or(0)
    }

    /// Grey view of one derived component; alpha preserved.
    pub fn visualize_component(&self, component: Component) -> RasterResult<Self> {
        let out = self
            .storage()?
            .iter()
            .map(|&p| {
                let v = clamp_channel(p.component(component));
                Pixel::from_clamped(p.alpha(), v, v, v)
            })
            .collect();
        Ok(self.with_pixels(out))
    }

    pub fn flip(&self, direction: FlipDirection) -> RasterResult<Self> {
        let src = self.storage()?;
        let out = match direction {
            FlipDirection::Horizontal => src
                .chunks_exact(self.width)
                .flat_map(|row| row.iter().rev().copied())
                .collect(),
            FlipDirection::Vertical => src
                .chunks_exact(self.width)
                .rev()
                .flat_map(|row| row.iter().copied())
                .collect(),
        };
        Ok(self.with_pixels(out))
    }

    /// Add `increment` to every color channel with clamping to `[0, 255]`.
    ///
    /// The result's declared max is raised when the brightened image exceeds it.
    pub fn brighten(&self, increment: i32) -> RasterResult<Self> {
        let out: Vec<Pixel> = self
            .storage()?
            .iter()
            .map(|&p| {
                Pixel::from_clamped(
                    p.alpha(),
                    saturating_channel_add(p.red(), increment),
                    saturating_channel_add(p.green(), increment),
                    saturating_channel_add(p.blue(), increment),
                )
            })
            .collect();
        let mut grid = self.with_pixels(out);
        grid.max_channel_value = grid.max_channel_value.max(grid.max_color_channel());
        Ok(grid)
    }

    /// Convolve each color channel with `kernel`. See [`ops::convolve`].
    pub fn filter(&self, kernel: &Kernel) -> RasterResult<Self> {
        ops::convolve(self, kernel)
    }

    /// Apply a 3x3 color matrix per pixel. See [`ops::apply_matrix`].
    pub fn color_transform(&self, matrix: &ColorMatrix) -> RasterResult<Self> {
        ops::apply_matrix(self, matrix)
    }

    /// Flatten `seeds` nearest-seed regions to their mean color. See [`ops::mosaic`].
    pub fn mosaic<R: Rng + ?Sized>(&self, seeds: usize, rng: &mut R) -> RasterResult<Self> {
        ops::mosaic(self, seeds, rng)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/grid.rs"]
mod tests;
