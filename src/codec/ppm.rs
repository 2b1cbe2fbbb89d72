//! Plain-text `P3` grid format.
//!
//! Layout: magic `P3`, width, height, max value, then `width * height * 3`
//! whitespace-separated integers in row-major R, G, B order. Lines starting
//! with `#` are comments.

use std::fmt::Write as _;

use crate::{
    foundation::{
        error::{RasterError, RasterResult},
        math::CHANNEL_MAX,
    },
    model::{ImageGrid, Pixel},
};

const MAGIC: &str = "P3";

pub fn decode_ppm(bytes: &[u8]) -> RasterResult<ImageGrid> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| RasterError::decode(format!("ppm is not valid utf-8: {e}")))?;
    let mut tokens = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace);

    match tokens.next() {
        Some(MAGIC) => {}
        Some(other) => {
            return Err(RasterError::decode(format!(
                "ppm must start with '{MAGIC}', found '{other}'"
            )));
        }
        None => return Err(RasterError::decode("ppm is empty")),
    }

    let mut next_int = |what: &str| -> RasterResult<i64> {
        let tok = tokens
            .next()
            .ok_or_else(|| RasterError::decode(format!("ppm ended before {what}")))?;
        tok.parse::<i64>()
            .map_err(|_| RasterError::decode(format!("ppm {what} is not an integer: '{tok}'")))
    };

    let width = next_int("width")?;
    let height = next_int("height")?;
    let max = next_int("max value")?;
    if width <= 0 || height <= 0 {
        return Err(RasterError::decode(format!(
            "ppm dimensions must be positive, got {width}x{height}"
        )));
    }
    if !(0..=i64::from(CHANNEL_MAX)).contains(&max) {
        return Err(RasterError::decode(format!(
            "ppm max value must be in 0..=255, got {max}"
        )));
    }
    let (width, height) = (width as usize, height as usize);
    let count = width
        .checked_mul(height)
        .ok_or_else(|| RasterError::decode("ppm dimensions overflow"))?;

    let mut pixels = Vec::with_capacity(count);
    for _ in 0..count {
        let mut rgb = [0i32; 3];
        for (c, name) in rgb.iter_mut().zip(["red", "green", "blue"]) {
            let v = next_int(name)?;
            if v < 0 || v > max {
                return Err(RasterError::decode(format!(
                    "ppm {name} value {v} outside 0..={max}"
                )));
            }
            *c = v as i32;
        }
        pixels.push(Pixel::rgb(rgb[0], rgb[1], rgb[2])?);
    }

    ImageGrid::new(width, height, max as i32, pixels)
}

/// One integer per line after the three header lines; no trailing newline.
pub fn encode_ppm(grid: &ImageGrid) -> RasterResult<Vec<u8>> {
    let mut out = String::with_capacity(16 + grid.pixel_count() * 12);
    let header = writeln!(
        out,
        "{MAGIC}\n{} {}\n{}",
        grid.width(),
        grid.height(),
        grid.max_channel_value()
    );
    header.map_err(|e| RasterError::encode(format!("ppm header: {e}")))?;

    let values = grid
        .pixels()
        .iter()
        .flat_map(|p| [p.red(), p.green(), p.blue()])
        .map(|v| v.to_string())
        .collect::<Vec<_>>();
    out.push_str(&values.join("\n"));
    Ok(out.into_bytes())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/ppm.rs"]
mod tests;
