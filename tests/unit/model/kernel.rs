use super::*;

#[test]
fn rejects_empty_ragged_and_even() {
    let empty: Vec<Vec<f64>> = Vec::new();
    assert!(matches!(
        Kernel::new(&empty),
        Err(RasterError::InvalidKernel(_))
    ));
    assert!(matches!(
        Kernel::new(&[vec![]]),
        Err(RasterError::InvalidKernel(_))
    ));
    assert!(matches!(
        Kernel::new(&[vec![1.0, 2.0, 3.0], vec![1.0], vec![1.0, 2.0, 3.0]]),
        Err(RasterError::InvalidKernel(_))
    ));
    assert!(matches!(
        Kernel::new(&[vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0, 2.0]]),
        Err(RasterError::InvalidKernel(_))
    ));
    assert!(matches!(
        Kernel::new(&[[1.0], [2.0]]),
        Err(RasterError::InvalidKernel(_))
    ));
}

#[test]
fn accepts_non_square_odd() {
    let k = Kernel::new(&[[1.0, 2.0, 3.0]]).unwrap();
    assert_eq!((k.width(), k.height()), (3, 1));
    assert_eq!(k.get(0, -1).unwrap(), 1.0);
    assert_eq!(k.get(0, 1).unwrap(), 3.0);
    assert!(matches!(k.get(1, 0), Err(RasterError::OutOfBounds(_))));
}

#[test]
fn get_is_center_relative() {
    let k = Kernel::new(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
    assert_eq!(k.get(0, 0).unwrap(), 5.0);
    assert_eq!(k.get(-1, -1).unwrap(), 1.0);
    assert_eq!(k.get(1, 1).unwrap(), 9.0);
    assert_eq!(k.get(-1, 1).unwrap(), 3.0);
    assert!(matches!(k.get(2, 0), Err(RasterError::OutOfBounds(_))));
    assert!(matches!(k.get(0, -2), Err(RasterError::OutOfBounds(_))));
}

#[test]
fn builtin_kernels_match_catalog() {
    let blur = Kernel::gaussian_blur();
    assert_eq!((blur.width(), blur.height()), (3, 3));
    assert_eq!(blur.get(0, 0).unwrap(), 0.25);
    assert_eq!(blur.get(-1, 0).unwrap(), 0.125);
    assert_eq!(blur.get(1, 1).unwrap(), 0.0625);
    let sum: f64 = blur.taps().map(|(_, _, k)| k).sum();
    assert_eq!(sum, 1.0);

    let sharpen = Kernel::sharpen();
    assert_eq!((sharpen.width(), sharpen.height()), (5, 5));
    assert_eq!(sharpen.get(0, 0).unwrap(), 1.0);
    assert_eq!(sharpen.get(1, -1).unwrap(), 0.25);
    assert_eq!(sharpen.get(-2, 2).unwrap(), -0.125);
    assert_eq!(sharpen.get(0, 2).unwrap(), -0.125);
}

#[test]
fn taps_cover_every_cell_once() {
    let k = Kernel::sharpen();
    let taps: Vec<_> = k.taps().collect();
    assert_eq!(taps.len(), 25);
    assert_eq!(taps[0].0, -2);
    assert_eq!(taps[0].1, -2);
    assert_eq!(taps[12], (0, 0, 1.0));
    for (dr, dc, c) in taps {
        assert_eq!(k.get(dr, dc).unwrap(), c);
    }
}
