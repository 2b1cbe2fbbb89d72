use super::*;

fn sample() -> ImageGrid {
    ImageGrid::new(
        2,
        1,
        200,
        vec![
            Pixel::argb(128, 10, 20, 30).unwrap(),
            Pixel::argb(255, 200, 100, 0).unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn png_round_trip_keeps_alpha() {
    let g = sample();
    let bytes = encode_raster(&g, image::ImageFormat::Png).unwrap();
    let back = decode_raster(&bytes, image::ImageFormat::Png).unwrap();
    assert_eq!(back.pixels(), g.pixels());
    assert_eq!(back.max_channel_value(), 200);
}

#[test]
fn bmp_drops_alpha() {
    let bytes = encode_raster(&sample(), image::ImageFormat::Bmp).unwrap();
    let back = decode_raster(&bytes, image::ImageFormat::Bmp).unwrap();
    assert_eq!(back.pixel(0, 0).unwrap(), Pixel::rgb(10, 20, 30).unwrap());
    assert_eq!(back.pixel(0, 1).unwrap(), Pixel::rgb(200, 100, 0).unwrap());
}

#[test]
fn jpeg_encodes_opaque_dimensions() {
    let g = ImageGrid::filled(8, 8, Pixel::rgb(120, 60, 30).unwrap()).unwrap();
    let bytes = encode_raster(&g, image::ImageFormat::Jpeg).unwrap();
    let back = decode_raster(&bytes, image::ImageFormat::Jpeg).unwrap();
    assert_eq!((back.width(), back.height()), (8, 8));
    assert!(back.pixels().iter().all(|p| p.alpha() == 255));
}

#[test]
fn garbage_fails_to_decode() {
    let err = decode_raster(b"not a png", image::ImageFormat::Png).unwrap_err();
    assert!(matches!(err, RasterError::Decode(_)));
}
