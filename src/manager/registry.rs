use std::collections::HashMap;

use rand::Rng;

use crate::{
    foundation::error::{RasterError, RasterResult},
    model::{ColorMatrix, Component, FlipDirection, ImageGrid, Kernel},
};

/// A fully-parameterized transformation ready to run against a grid.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    Component(Component),
    Flip(FlipDirection),
    Brighten(i32),
    Filter(Kernel),
    ColorTransform(ColorMatrix),
    Mosaic(usize),
}

impl Operation {
    pub fn apply<R: Rng + ?Sized>(&self, grid: &ImageGrid, rng: &mut R) -> RasterResult<ImageGrid> {
        match self {
            Operation::Component(c) => grid.visualize_component(*c),
            Operation::Flip(d) => grid.flip(*d),
            Operation::Brighten(inc) => grid.brighten(*inc),
            Operation::Filter(k) => grid.filter(k),
            Operation::ColorTransform(m) => grid.color_transform(m),
            Operation::Mosaic(seeds) => grid.mosaic(*seeds, rng),
        }
    }
}

type OperationBuilder = fn(&[&str]) -> RasterResult<Operation>;

/// One registered operation name.
#[derive(Clone, Copy, Debug)]
pub struct OperationSpec {
    pub name: &'static str,
    /// Usage line shown by the interactive `menu`.
    pub usage: &'static str,
    /// Whether a leading integer argument is required.
    pub takes_int: bool,
    build: OperationBuilder,
}

const CATALOG: &[OperationSpec] = &[
    OperationSpec {
        name: "red-component",
        usage: "red-component image-name result-name (greyscale from the red channel)",
        takes_int: false,
        build: |_| Ok(Operation::Component(Component::Red)),
    },
    OperationSpec {
        name: "green-component",
        usage: "green-component image-name result-name (greyscale from the green channel)",
        takes_int: false,
        build: |_| Ok(Operation::Component(Component::Green)),
    },
    OperationSpec {
        name: "blue-component",
        usage: "blue-component image-name result-name (greyscale from the blue channel)",
        takes_int: false,
        build: |_| Ok(Operation::Component(Component::Blue)),
    },
    OperationSpec {
        name: "value-component",
        usage: "value-component image-name result-name (greyscale from max(r, g, b))",
        takes_int: false,
        build: |_| Ok(Operation::Component(Component::Value)),
    },
    OperationSpec {
        name: "intensity-component",
        usage: "intensity-component image-name result-name (greyscale from mean(r, g, b))",
        takes_int: false,
        build: |_| Ok(Operation::Component(Component::Intensity)),
    },
    OperationSpec {
        name: "luma-component",
        usage: "luma-component image-name result-name (greyscale from luma)",
        takes_int: false,
        build: |_| Ok(Operation::Component(Component::Luma)),
    },
    OperationSpec {
        name: "horizontal-flip",
        usage: "horizontal-flip image-name result-name (mirror left to right)",
        takes_int: false,
        build: |_| Ok(Operation::Flip(FlipDirection::Horizontal)),
    },
    OperationSpec {
        name: "vertical-flip",
        usage: "vertical-flip image-name result-name (mirror top to bottom)",
        takes_int: false,
        build: |_| Ok(Operation::Flip(FlipDirection::Vertical)),
    },
    OperationSpec {
        name: "brighten",
        usage: "brighten increment image-name result-name (negative increments darken)",
        takes_int: true,
        build: build_brighten,
    },
    OperationSpec {
        name: "blur",
        usage: "blur image-name result-name (3x3 gaussian blur)",
        takes_int: false,
        build: |_| Ok(Operation::Filter(Kernel::gaussian_blur())),
    },
    OperationSpec {
        name: "sharpen",
        usage: "sharpen image-name result-name (5x5 sharpen)",
        takes_int: false,
        build: |_| Ok(Operation::Filter(Kernel::sharpen())),
    },
    OperationSpec {
        name: "greyscale",
        usage: "greyscale image-name result-name (luma-weighted greyscale)",
        takes_int: false,
        build: |_| Ok(Operation::ColorTransform(ColorMatrix::greyscale())),
    },
    OperationSpec {
        name: "sepia",
        usage: "sepia image-name result-name (sepia tone)",
        takes_int: false,
        build: |_| Ok(Operation::ColorTransform(ColorMatrix::sepia())),
    },
    OperationSpec {
        name: "mosaic",
        usage: "mosaic seeds image-name result-name (stained-glass with the given seed count)",
        takes_int: true,
        build: build_mosaic,
    },
];

fn build_brighten(args: &[&str]) -> RasterResult<Operation> {
    let inc = int_arg("brighten", args)?;
    let inc = i32::try_from(inc).map_err(|_| {
        RasterError::invalid_argument(format!("brighten increment {inc} out of range"))
    })?;
    Ok(Operation::Brighten(inc))
}

fn build_mosaic(args: &[&str]) -> RasterResult<Operation> {
    let seeds = int_arg("mosaic", args)?;
    if seeds < 1 {
        return Err(RasterError::invalid_argument(format!(
            "mosaic seed count must be positive, got {seeds}"
        )));
    }
    let seeds = usize::try_from(seeds).map_err(|_| {
        RasterError::invalid_argument(format!("mosaic seed count {seeds} out of range"))
    })?;
    Ok(Operation::Mosaic(seeds))
}

fn int_arg(op: &str, args: &[&str]) -> RasterResult<i64> {
    let raw = args
        .first()
        .ok_or_else(|| RasterError::invalid_argument(format!("{op} needs an integer argument")))?;
    raw.trim().parse::<i64>().map_err(|_| {
        RasterError::invalid_argument(format!("{op} argument '{raw}' is not an integer"))
    })
}

/// Fixed name -> operation-builder table.
#[derive(Clone, Debug)]
pub struct OperationRegistry {
    by_name: HashMap<&'static str, OperationSpec>,
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self {
            by_name: CATALOG.iter().map(|s| (s.name, *s)).collect(),
        }
    }
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spec(&self, name: &str) -> RasterResult<&OperationSpec> {
        self.by_name
            .get(name)
            .ok_or_else(|| RasterError::unknown_command(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Resolve `name` and its arguments into an [`Operation`].
    pub fn build(&self, name: &str, args: &[&str]) -> RasterResult<Operation> {
        (self.spec(name)?.build)(args)
    }

    /// Registered operations in catalog order.
    pub fn specs(&self) -> impl Iterator<Item = &'static OperationSpec> {
        CATALOG.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/manager/registry.rs"]
mod tests;
