use super::*;

const SAMPLE: &str = "P3
# written by hand
2 2
255
25 36 104   27 99 84
207 255 0
# trailing comment
25 36 104
";

#[test]
fn decode_skips_comments_and_reads_row_major() {
    let g = decode_ppm(SAMPLE.as_bytes()).unwrap();
    assert_eq!((g.width(), g.height(), g.max_channel_value()), (2, 2, 255));
    assert_eq!(g.pixel(0, 1).unwrap(), Pixel::rgb(27, 99, 84).unwrap());
    assert_eq!(g.pixel(1, 0).unwrap(), Pixel::rgb(207, 255, 0).unwrap());
    assert!(g.pixels().iter().all(|p| p.alpha() == 255));
}

#[test]
fn encode_writes_one_value_per_line() {
    let g = decode_ppm(SAMPLE.as_bytes()).unwrap();
    let text = String::from_utf8(encode_ppm(&g).unwrap()).unwrap();
    let expected = "P3\n2 2\n255\n25\n36\n104\n27\n99\n84\n207\n255\n0\n25\n36\n104";
    assert_eq!(text, expected);
    assert_eq!(decode_ppm(text.as_bytes()).unwrap(), g);
}

#[test]
fn rejects_wrong_magic() {
    let err = decode_ppm(b"P6\n1 1\n255\n0 0 0").unwrap_err();
    assert!(matches!(err, RasterError::Decode(_)));
    assert!(matches!(decode_ppm(b""), Err(RasterError::Decode(_))));
    assert!(matches!(decode_ppm(b"# only\n"), Err(RasterError::Decode(_))));
}

#[test]
fn rejects_short_or_garbled_data() {
    assert!(matches!(
        decode_ppm(b"P3\n2 1\n255\n1 2 3 4 5"),
        Err(RasterError::Decode(_))
    ));
    assert!(matches!(
        decode_ppm(b"P3\n1 1\n255\n1 x 3"),
        Err(RasterError::Decode(_))
    ));
    assert!(matches!(
        decode_ppm(b"P3\n0 1\n255\n"),
        Err(RasterError::Decode(_))
    ));
}

#[test]
fn rejects_values_above_declared_max() {
    assert!(matches!(
        decode_ppm(b"P3\n1 1\n100\n101 0 0"),
        Err(RasterError::Decode(_))
    ));
    assert!(matches!(
        decode_ppm(b"P3\n1 1\n255\n0 0 -1"),
        Err(RasterError::Decode(_))
    ));
    assert!(decode_ppm(b"P3\n1 1\n100\n100 0 0").is_ok());
}
