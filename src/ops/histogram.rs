use serde::Serialize;

use crate::model::{ImageGrid, Pixel};

pub const BINS: usize = 256;

/// Per-channel frequency tables over `[0, 255]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Histogram {
    pub red: Vec<u32>,
    pub green: Vec<u32>,
    pub blue: Vec<u32>,
    pub intensity: Vec<u32>,
}

impl Histogram {
    pub fn of(grid: &ImageGrid) -> Self {
        let mut h = Self {
            red: vec![0; BINS],
            green: vec![0; BINS],
            blue: vec![0; BINS],
            intensity: vec![0; BINS],
        };
        for &p in grid.pixels() {
            h.count(p);
        }
        h
    }

    fn count(&mut self, p: Pixel) {
        self.red[bin(p.red())] += 1;
        self.green[bin(p.green())] += 1;
        self.blue[bin(p.blue())] += 1;
        self.intensity[bin(p.intensity())] += 1;
    }

    /// Tallest bar across all four tables; used to scale plots.
    pub fn peak(&self) -> u32 {
        [&self.red, &self.green, &self.blue, &self.intensity]
            .into_iter()
            .flat_map(|t| t.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

fn bin(v: i32) -> usize {
    v.clamp(0, BINS as i32 - 1) as usize
}

#[cfg(test)]
#[path = "../../tests/unit/ops/histogram.rs"]
mod tests;
