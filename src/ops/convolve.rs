use crate::{
    foundation::{error::RasterResult, math::round_clamp_channel},
    model::{ImageGrid, Kernel, Pixel},
};

const FILTERED_ALPHA: i32 = 255;

/// Convolve the red, green and blue channels of `grid` with `kernel`.
///
/// Taps that fall outside the image contribute nothing and the kernel is not
/// renormalized, so edges darken under blur. Sums are rounded, then clamped to
/// `[0, 255]`. Output alpha is always 255.
pub fn convolve(grid: &ImageGrid, kernel: &Kernel) -> RasterResult<ImageGrid> {
    let src = grid.storage()?;
    let w = grid.width() as i64;
    let h = grid.height() as i64;
    let taps: Vec<(i32, i32, f64)> = kernel.taps().filter(|&(_, _, k)| k != 0.0).collect();

    let mut out = Vec::with_capacity(src.len());
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f64; 3];
            for &(dr, dc, k) in &taps {
                let sy = y + i64::from(dr);
                let sx = x + i64::from(dc);
                if sy < 0 || sy >= h || sx < 0 || sx >= w {
                    continue;
                }
                let p = src[(sy * w + sx) as usize];
                acc[0] += k * f64::from(p.red());
                acc[1] += k * f64::from(p.green());
                acc[2] += k * f64::from(p.blue());
            }
            out.push(Pixel::from_clamped(
                FILTERED_ALPHA,
                round_clamp_channel(acc[0]),
                round_clamp_channel(acc[1]),
                round_clamp_channel(acc[2]),
            ));
        }
    }
    Ok(grid.with_pixels(out))
}

#[cfg(test)]
#[path = "../../tests/unit/ops/convolve.rs"]
mod tests;
