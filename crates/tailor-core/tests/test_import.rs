mod common;

use common::png_bytes;
use tailor_core::error::TailorError;
use tailor_core::import::{decode_image, load_image_file};

#[test]
fn test_decode_png_keeps_encoded_bytes() {
    let bytes = png_bytes(7, 3, [1, 2, 3, 255]);
    let img = decode_image(bytes.clone()).unwrap();

    assert_eq!(img.dimensions(), (7, 3));
    assert_eq!(img.encoded.as_slice(), bytes.as_slice());
    assert_eq!(img.pixels.get_pixel(0, 0).0, [1, 2, 3, 255]);
}

#[test]
fn test_decode_rejects_non_image() {
    let err = decode_image(b"definitely not an image".to_vec()).unwrap_err();
    assert!(matches!(err, TailorError::ImageError(_)), "got: {err}");
}

#[test]
fn test_load_image_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    std::fs::write(&path, png_bytes(5, 5, [0, 0, 0, 0])).unwrap();

    let img = load_image_file(&path).unwrap();
    assert_eq!(img.dimensions(), (5, 5));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_image_file(&dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, TailorError::Io(_)), "got: {err}");
}
