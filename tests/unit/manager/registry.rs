use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::model::Pixel;

const NAMES: [&str; 14] = [
    "red-component",
    "green-component",
    "blue-component",
    "value-component",
    "intensity-component",
    "luma-component",
    "horizontal-flip",
    "vertical-flip",
    "brighten",
    "blur",
    "sharpen",
    "greyscale",
    "sepia",
    "mosaic",
];

#[test]
fn catalog_has_every_name() {
    let reg = OperationRegistry::new();
    for name in NAMES {
        assert!(reg.contains(name), "{name}");
    }
    assert_eq!(reg.specs().count(), NAMES.len());
    let int_ops: Vec<_> = reg.specs().filter(|s| s.takes_int).map(|s| s.name).collect();
    assert_eq!(int_ops, vec!["brighten", "mosaic"]);
}

#[test]
fn unknown_name_is_unknown_command() {
    let reg = OperationRegistry::new();
    assert!(matches!(
        reg.build("emboss", &[]),
        Err(RasterError::UnknownCommand(_))
    ));
}

#[test]
fn builds_fixed_constants() {
    let reg = OperationRegistry::new();
    assert_eq!(
        reg.build("blur", &[]).unwrap(),
        Operation::Filter(Kernel::gaussian_blur())
    );
    assert_eq!(
        reg.build("sepia", &[]).unwrap(),
        Operation::ColorTransform(ColorMatrix::sepia())
    );
    assert_eq!(
        reg.build("vertical-flip", &[]).unwrap(),
        Operation::Flip(FlipDirection::Vertical)
    );
    assert_eq!(
        reg.build("luma-component", &[]).unwrap(),
        Operation::Component(Component::Luma)
    );
}

#[test]
fn integer_arguments_are_parsed_and_validated() {
    let reg = OperationRegistry::new();
    assert_eq!(
        reg.build("brighten", &["-15"]).unwrap(),
        Operation::Brighten(-15)
    );
    assert_eq!(reg.build("mosaic", &["8"]).unwrap(), Operation::Mosaic(8));

    for (name, args) in [
        ("brighten", &[][..]),
        ("brighten", &["ten"][..]),
        ("brighten", &["99999999999"][..]),
        ("mosaic", &["0"][..]),
        ("mosaic", &["-3"][..]),
    ] {
        assert!(
            matches!(reg.build(name, args), Err(RasterError::InvalidArgument(_))),
            "{name} {args:?}"
        );
    }
}

#[test]
fn operation_apply_dispatches() {
    let grid = ImageGrid::new(
        2,
        1,
        255,
        vec![Pixel::rgb(10, 20, 30).unwrap(), Pixel::rgb(40, 50, 60).unwrap()],
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let flipped = Operation::Flip(FlipDirection::Horizontal)
        .apply(&grid, &mut rng)
        .unwrap();
    assert_eq!(flipped.pixel(0, 0).unwrap(), Pixel::rgb(40, 50, 60).unwrap());

    let bright = Operation::Brighten(5).apply(&grid, &mut rng).unwrap();
    assert_eq!(bright.pixel(0, 0).unwrap(), Pixel::rgb(15, 25, 35).unwrap());

    let one = Operation::Mosaic(1).apply(&grid, &mut rng).unwrap();
    assert!(one.pixels().iter().all(|p| *p == Pixel::rgb(25, 35, 45).unwrap()));

    assert!(matches!(
        Operation::Mosaic(3).apply(&grid, &mut rng),
        Err(RasterError::InvalidArgument(_))
    ));
}
