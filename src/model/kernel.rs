use crate::foundation::error::{RasterError, RasterResult};

/// Odd-sized convolution kernel indexed relative to its center cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    width: usize,
    height: usize,
    coeffs: Vec<f64>, // row-major
}

impl Kernel {
    /// Build a kernel from rows of coefficients.
    ///
    /// Rows must be non-empty, all the same length, and both dimensions odd.
    pub fn new<R: AsRef<[f64]>>(rows: &[R]) -> RasterResult<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(RasterError::invalid_kernel("kernel must have at least one row"));
        }
        let width = rows[0].as_ref().len();
        if width == 0 {
            return Err(RasterError::invalid_kernel("kernel rows must be non-empty"));
        }
        if rows.iter().any(|r| r.as_ref().len() != width) {
            return Err(RasterError::invalid_kernel("kernel rows differ in length"));
        }
        if height % 2 == 0 || width % 2 == 0 {
            return Err(RasterError::invalid_kernel(format!(
                "kernel dimensions must be odd, got {height}x{width}"
            )));
        }

        let coeffs = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        Ok(Self {
            width,
            height,
            coeffs,
        })
    }

    /// 3x3 Gaussian-like blur.
    pub fn gaussian_blur() -> Self {
        Self::from_static(
            3,
            3,
            &[
                0.0625, 0.125, 0.0625, //
                0.125, 0.25, 0.125, //
                0.0625, 0.125, 0.0625,
            ],
        )
    }

    /// 5x5 sharpen: center 1.0, inner ring 0.25, outer ring -0.125.
    pub fn sharpen() -> Self {
        const O: f64 = -0.125;
        const I: f64 = 0.25;
        Self::from_static(
            5,
            5,
            &[
                O, O, O, O, O, //
                O, I, I, I, O, //
                O, I, 1.0, I, O, //
                O, I, I, I, O, //
                O, O, O, O, O,
            ],
        )
    }

    fn from_static(width: usize, height: usize, coeffs: &[f64]) -> Self {
        debug_assert_eq!(coeffs.len(), width * height);
        Self {
            width,
            height,
            coeffs: coeffs.to_vec(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Largest valid row offset, `(height - 1) / 2`.
    pub fn row_radius(&self) -> i32 {
        ((self.height - 1) / 2) as i32
    }

    /// Largest valid column offset, `(width - 1) / 2`.
    pub fn col_radius(&self) -> i32 {
        ((self.width - 1) / 2) as i32
    }

    /// Coefficient at `(row_offset, col_offset)` from the center; negative is up/left.
    pub fn get(&self, row_offset: i32, col_offset: i32) -> RasterResult<f64> {
        let (rr, cr) = (self.row_radius(), self.col_radius());
        if row_offset.abs() > rr || col_offset.abs() > cr {
            return Err(RasterError::out_of_bounds(format!(
                "offset ({row_offset}, {col_offset}) outside {}x{} kernel",
                self.height, self.width
            )));
        }
        let row = (row_offset + rr) as usize;
        let col = (col_offset + cr) as usize;
        Ok(self.coeffs[row * self.width + col])
    }

    /// Iterate `(row_offset, col_offset, coefficient)` in row-major order.
    pub(crate) fn taps(&self) -> impl Iterator<Item = (i32, i32, f64)> + '_ {
        let (rr, cr) = (self.row_radius(), self.col_radius());
        let w = self.width;
        self.coeffs.iter().enumerate().map(move |(i, &k)| {
            let dr = (i / w) as i32 - rr;
            let dc = (i % w) as i32 - cr;
            (dr, dc, k)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/kernel.rs"]
mod tests;
