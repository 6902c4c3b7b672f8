mod common;

use nutscan_core::error::NutscanError;
use nutscan_core::image_source::{data_url_bytes, decode_image, png_data_url};

use common::png_bytes;

// ---------------------------------------------------------------------------
// Data URLs
// ---------------------------------------------------------------------------

#[test]
fn test_base64_data_url_decodes() {
    assert_eq!(data_url_bytes("data:text/plain;base64,aGVsbG8=").unwrap(), b"hello");
}

#[test]
fn test_plain_data_url_returns_payload() {
    assert_eq!(data_url_bytes("data:text/plain,hello").unwrap(), b"hello");
}

#[test]
fn test_malformed_data_urls_fail() {
    for url in ["http://x/y.png", "data:image/png;base64", "data:image/png;base64,@@@"] {
        assert!(matches!(data_url_bytes(url), Err(NutscanError::InvalidDataUrl(_))), "{url}");
    }
}

// ---------------------------------------------------------------------------
// Image decoding
// ---------------------------------------------------------------------------

#[test]
fn test_decode_png_data_url() {
    let img = decode_image(&png_data_url(&png_bytes(6, 3))).unwrap();
    assert_eq!((img.width(), img.height()), (6, 3));
}

#[test]
fn test_decode_local_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.png");
    std::fs::write(&path, png_bytes(5, 5)).unwrap();

    let img = decode_image(path.to_str().unwrap()).unwrap();
    assert_eq!(img.width(), 5);
}

#[test]
fn test_decode_garbage_fails() {
    assert!(decode_image("data:image/png;base64,AAAA").is_err());
    assert!(matches!(
        decode_image("https://example.com/heatmap.png"),
        Err(NutscanError::InvalidDataUrl(_))
    ));
}
