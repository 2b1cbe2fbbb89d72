use crate::{
    foundation::{error::RasterResult, math::round_clamp_channel},
    model::{ColorMatrix, ImageGrid, Pixel},
};

/// Replace each pixel's `(r, g, b)` with `matrix * (r, g, b)`, rounded and clamped.
/// Alpha is carried over from the source pixel.
pub fn apply_matrix(grid: &ImageGrid, matrix: &ColorMatrix) -> RasterResult<ImageGrid> {
    let out = grid
        .storage()?
        .iter()
        .map(|&p| {
            let [r, g, b] = matrix.apply(p.red(), p.green(), p.blue());
            Pixel::from_clamped(
                p.alpha(),
                round_clamp_channel(r),
                round_clamp_channel(g),
                round_clamp_channel(b),
            )
        })
        .collect();
    Ok(grid.with_pixels(out))
}

#[cfg(test)]
#[path = "../../tests/unit/ops/color.rs"]
mod tests;
