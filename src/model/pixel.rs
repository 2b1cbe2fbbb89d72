use std::{fmt, str::FromStr};

use crate::foundation::{
    error::{RasterError, RasterResult},
    math::{CHANNEL_MAX, round_i32},
};

const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Immutable ARGB color value.
///
/// Color channels are non-negative; producing operations clamp them to `[0, 255]`.
/// Alpha is carried through as-is and only clamped when packed by a codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    a: i32,
    r: i32,
    g: i32,
    b: i32,
}

impl Pixel {
    /// Opaque pixel (alpha 255).
    pub fn rgb(r: i32, g: i32, b: i32) -> RasterResult<Self> {
        Self::argb(CHANNEL_MAX, r, g, b)
    }

    /// Pixel with explicit alpha. Fails if any color channel is negative.
    pub fn argb(a: i32, r: i32, g: i32, b: i32) -> RasterResult<Self> {
        if r < 0 || g < 0 || b < 0 {
            return Err(RasterError::invalid_pixel(format!(
                "negative color channel in ({r}, {g}, {b})"
            )));
        }
        Ok(Self { a, r, g, b })
    }

    /// Internal constructor for operations whose channels are already clamped.
    pub(crate) fn from_clamped(a: i32, r: i32, g: i32, b: i32) -> Self {
        debug_assert!(r >= 0 && g >= 0 && b >= 0);
        Self { a, r, g, b }
    }

    pub fn alpha(self) -> i32 {
        self.a
    }

    pub fn red(self) -> i32 {
        self.r
    }

    pub fn green(self) -> i32 {
        self.g
    }

    pub fn blue(self) -> i32 {
        self.b
    }

    /// Largest of the three color channels.
    pub fn value(self) -> i32 {
        self.r.max(self.g).max(self.b)
    }

    /// Rounded mean of the three color channels.
    pub fn intensity(self) -> i32 {
        let sum = i64::from(self.r) + i64::from(self.g) + i64::from(self.b);
        round_i32(sum as f64 / 3.0)
    }

    /// Rounded Rec. 709 luma.
    pub fn luma(self) -> i32 {
        round_i32(
            LUMA_WEIGHTS[0] * f64::from(self.r)
                + LUMA_WEIGHTS[1] * f64::from(self.g)
                + LUMA_WEIGHTS[2] * f64::from(self.b),
        )
    }

    /// Read the derived value named by `component`.
    pub fn component(self, component: Component) -> i32 {
        match component {
            Component::Red => self.r,
            Component::Green => self.g,
            Component::Blue => self.b,
            Component::Value => self.value(),
            Component::Intensity => self.intensity(),
            Component::Luma => self.luma(),
        }
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Per-pixel readout used by component visualization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Red,
    Green,
    Blue,
    Value,
    Intensity,
    Luma,
}

impl Component {
    pub const ALL: [Component; 6] = [
        Component::Red,
        Component::Green,
        Component::Blue,
        Component::Value,
        Component::Intensity,
        Component::Luma,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Component::Red => "red",
            Component::Green => "green",
            Component::Blue => "blue",
            Component::Value => "value",
            Component::Intensity => "intensity",
            Component::Luma => "luma",
        }
    }
}

impl FromStr for Component {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Component::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RasterError::invalid_argument(format!("unknown component '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/pixel.rs"]
mod tests;
