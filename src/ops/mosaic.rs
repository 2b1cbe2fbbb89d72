//! Stained-glass mosaic: nearest-seed clustering flattened to per-cluster mean color.
//!
//! 1. Pick `seeds` distinct pixel positions uniformly at random.
//! 2. Assign every pixel to the seed at the smallest Euclidean distance in
//!    `(row, col)` space; ties go to the seed that comes first.
//! 3. Replace every pixel with the rounded mean ARGB of its cluster, color
//!    channels clamped to `[0, 255]`.
//!
//! The naive scan is `O(width * height * seeds)`.

use rand::Rng;

use crate::{
    foundation::{
        error::{RasterError, RasterResult},
        math::{round_clamp_channel, round_i32},
    },
    model::{ImageGrid, Pixel},
};

/// Mosaic `grid` into `seeds` regions using `rng` for seed placement.
///
/// Fails with `InvalidArgument` unless `1 <= seeds <= width * height`.
pub fn mosaic<R: Rng + ?Sized>(
    grid: &ImageGrid,
    seeds: usize,
    rng: &mut R,
) -> RasterResult<ImageGrid> {
    let picked = pick_seeds(grid, seeds, rng)?;
    mosaic_from_seeds(grid, &picked)
}

/// Choose `seeds` distinct row-major pixel indices without replacement.
pub fn pick_seeds<R: Rng + ?Sized>(
    grid: &ImageGrid,
    seeds: usize,
    rng: &mut R,
) -> RasterResult<Vec<usize>> {
    let n = grid.pixel_count();
    if seeds == 0 || seeds > n {
        return Err(RasterError::invalid_argument(format!(
            "mosaic seed count must be in 1..={n}, got {seeds}"
        )));
    }
    Ok(rand::seq::index::sample(rng, n, seeds).into_vec())
}

/// Mosaic with explicit seed positions (row-major indices). Seed order decides ties.
pub fn mosaic_from_seeds(grid: &ImageGrid, seeds: &[usize]) -> RasterResult<ImageGrid> {
    let src = grid.storage()?;
    if seeds.is_empty() {
        return Err(RasterError::invalid_argument("mosaic needs at least one seed"));
    }
    if let Some(&bad) = seeds.iter().find(|&&s| s >= src.len()) {
        return Err(RasterError::out_of_bounds(format!(
            "seed index {bad} outside image of {} pixels",
            src.len()
        )));
    }

    let w = grid.width();
    let centers: Vec<(i64, i64)> = seeds
        .iter()
        .map(|&s| ((s / w) as i64, (s % w) as i64))
        .collect();

    let labels: Vec<usize> = (0..src.len())
        .map(|i| nearest_seed(((i / w) as i64, (i % w) as i64), &centers))
        .collect();

    let mut sums = vec![ClusterSum::default(); centers.len()];
    for (p, &label) in src.iter().zip(&labels) {
        sums[label].add(*p);
    }
    let means: Vec<Option<Pixel>> = sums.iter().map(ClusterSum::mean).collect();

    tracing::debug!(
        seeds = centers.len(),
        pixels = src.len(),
        "mosaic clusters assigned"
    );

    let out = labels
        .iter()
        .zip(src)
        .map(|(&label, &p)| means[label].unwrap_or(p))
        .collect();
    Ok(grid.with_pixels(out))
}

fn nearest_seed(pos: (i64, i64), centers: &[(i64, i64)]) -> usize {
    let mut best = 0usize;
    let mut best_d = i64::MAX;
    for (idx, &(r, c)) in centers.iter().enumerate() {
        let dr = pos.0 - r;
        let dc = pos.1 - c;
        let d = dr * dr + dc * dc;
        if d < best_d {
            best = idx;
            best_d = d;
        }
    }
    best
}

#[derive(Clone, Copy, Debug, Default)]
struct ClusterSum {
    count: i64,
    a: i64,
    r: i64,
    g: i64,
    b: i64,
}

impl ClusterSum {
    fn add(&mut self, p: Pixel) {
        self.count += 1;
        self.a += i64::from(p.alpha());
        self.r += i64::from(p.red());
        self.g += i64::from(p.green());
        self.b += i64::from(p.blue());
    }

    fn mean(&self) -> Option<Pixel> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        let avg = |sum: i64| sum as f64 / n;
        Some(Pixel::from_clamped(
            round_i32(avg(self.a)),
            round_clamp_channel(avg(self.r)),
            round_clamp_channel(avg(self.g)),
            round_clamp_channel(avg(self.b)),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ops/mosaic.rs"]
mod tests;
