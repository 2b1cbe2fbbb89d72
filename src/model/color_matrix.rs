use crate::foundation::error::{RasterError, RasterResult};

/// 3x3 linear color transform. Row 0 produces red, row 1 green, row 2 blue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMatrix {
    rows: [[f64; 3]; 3],
}

impl ColorMatrix {
    /// Build from exactly three rows of three coefficients each.
    pub fn new<R: AsRef<[f64]>>(rows: &[R]) -> RasterResult<Self> {
        if rows.len() != 3 {
            return Err(RasterError::invalid_matrix(format!(
                "expected 3 rows, got {}",
                rows.len()
            )));
        }
        let mut out = [[0.0; 3]; 3];
        for (dst, src) in out.iter_mut().zip(rows) {
            let src = src.as_ref();
            *dst = src.try_into().map_err(|_| {
                RasterError::invalid_matrix(format!("expected 3 columns, got {}", src.len()))
            })?;
        }
        Ok(Self { rows: out })
    }

    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    pub const fn identity() -> Self {
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Luma-weighted greyscale: three identical rows.
    pub const fn greyscale() -> Self {
        const LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];
        Self::from_rows([LUMA, LUMA, LUMA])
    }

    pub const fn sepia() -> Self {
        Self::from_rows([
            [0.393, 0.769, 0.189],
            [0.349, 0.686, 0.168],
            [0.272, 0.534, 0.131],
        ])
    }

    pub fn red_coefficients(&self) -> [f64; 3] {
        self.rows[0]
    }

    pub fn green_coefficients(&self) -> [f64; 3] {
        self.rows[1]
    }

    pub fn blue_coefficients(&self) -> [f64; 3] {
        self.rows[2]
    }

    /// Unrounded `(r, g, b)` outputs for the given source channels.
    pub fn apply(&self, r: i32, g: i32, b: i32) -> [f64; 3] {
        let src = [f64::from(r), f64::from(g), f64::from(b)];
        self.rows
            .map(|c| c[0] * src[0] + c[1] * src[1] + c[2] * src[2])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/color_matrix.rs"]
mod tests;
