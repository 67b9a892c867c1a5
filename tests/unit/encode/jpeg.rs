use super::*;
use crate::foundation::core::Canvas;

fn surface(side: u32) -> Surface {
    Surface::new(Canvas::new(side, side).unwrap()).unwrap()
}

#[test]
fn encodes_surface_as_jpeg_with_same_dimensions() {
    let out = encode_jpeg(&surface(16), DEFAULT_JPEG_QUALITY).unwrap();
    assert_eq!((out.width, out.height), (16, 16));
    assert_eq!(&out.bytes[..3], &[0xFF, 0xD8, 0xFF]);

    let back = image::load_from_memory_with_format(&out.bytes, image::ImageFormat::Jpeg).unwrap();
    assert_eq!((back.width(), back.height()), (16, 16));
}

#[test]
fn rejects_out_of_range_quality() {
    assert!(matches!(
        encode_jpeg(&surface(2), 0),
        Err(TryonError::Validation(_))
    ));
    assert!(encode_jpeg(&surface(2), 101).is_err());
}

#[test]
fn data_uri_has_jpeg_prefix() {
    let out = encode_jpeg(&surface(4), 80).unwrap();
    let uri = out.to_data_uri();
    assert!(uri.starts_with("data:image/jpeg;base64,/9j/"));
    assert!(!out.is_empty());
}

#[test]
fn download_filename_pattern() {
    assert_eq!(
        download_filename("eticaret-urun-gorseli", 1_700_000_000_123),
        "eticaret-urun-gorseli-1700000000123.jpg"
    );
}
