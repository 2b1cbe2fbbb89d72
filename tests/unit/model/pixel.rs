use std::collections::HashSet;

use super::*;

#[test]
fn rgb_is_opaque() {
    let p = Pixel::rgb(1, 2, 3).unwrap();
    assert_eq!(p.alpha(), 255);
    assert_eq!((p.red(), p.green(), p.blue()), (1, 2, 3));
}

#[test]
fn negative_color_is_rejected() {
    assert!(matches!(
        Pixel::rgb(-1, 0, 0),
        Err(RasterError::InvalidPixel(_))
    ));
    assert!(matches!(
        Pixel::argb(255, 0, 0, -7),
        Err(RasterError::InvalidPixel(_))
    ));
}

#[test]
fn alpha_is_not_validated() {
    let p = Pixel::argb(-4, 0, 0, 0).unwrap();
    assert_eq!(p.alpha(), -4);
    let p = Pixel::argb(900, 0, 0, 0).unwrap();
    assert_eq!(p.alpha(), 900);
}

#[test]
fn derived_readouts() {
    let p = Pixel::rgb(100, 150, 200).unwrap();
    assert_eq!(p.value(), 200);
    assert_eq!(p.intensity(), 150);
    // 21.26 + 107.28 + 14.44 = 142.98
    assert_eq!(p.luma(), 143);

    // (25 + 36 + 104) / 3 = 55.0
    let q = Pixel::rgb(25, 36, 104).unwrap();
    assert_eq!(q.intensity(), 55);
    // (1 + 1 + 0) / 3 = 0.67 rounds up
    assert_eq!(Pixel::rgb(1, 1, 0).unwrap().intensity(), 1);
}

#[test]
fn component_dispatch_matches_readouts() {
    let p = Pixel::rgb(207, 255, 0).unwrap();
    assert_eq!(p.component(Component::Red), 207);
    assert_eq!(p.component(Component::Green), 255);
    assert_eq!(p.component(Component::Blue), 0);
    assert_eq!(p.component(Component::Value), p.value());
    assert_eq!(p.component(Component::Intensity), p.intensity());
    assert_eq!(p.component(Component::Luma), p.luma());
}

#[test]
fn equality_and_hash_cover_alpha() {
    let a = Pixel::argb(255, 1, 2, 3).unwrap();
    let b = Pixel::rgb(1, 2, 3).unwrap();
    let c = Pixel::argb(0, 1, 2, 3).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<Pixel> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn component_parses_case_insensitively() {
    assert_eq!("LUMA".parse::<Component>().unwrap(), Component::Luma);
    assert_eq!(" red ".parse::<Component>().unwrap(), Component::Red);
    assert!(matches!(
        "alpha".parse::<Component>(),
        Err(RasterError::InvalidArgument(_))
    ));
}

#[test]
fn display_shows_color_channels() {
    assert_eq!(Pixel::rgb(1, 2, 3).unwrap().to_string(), "(1, 2, 3)");
}

#[test]
fn intensity_of_huge_channels_does_not_overflow() {
    let p = Pixel::rgb(i32::MAX, i32::MAX, 0).unwrap();
    // (2 * (2^31 - 1)) / 3 = 1431655764.67
    assert_eq!(p.intensity(), 1_431_655_765);
    assert_eq!(p.component(Component::Intensity), 1_431_655_765);
}
