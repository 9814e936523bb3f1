use std::fs;
use std::path::Path;

use arachnida_engine::{
    has_image_extension, inspect_file, read_exif, ExifField, ImageFormat, InspectError,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes
}

fn gif_header(width: u16, height: u16) -> Vec<u8> {
    let mut bytes = b"GIF89a".to_vec();
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0]);
    bytes
}

fn bmp_header(width: i32, height: i32) -> Vec<u8> {
    let mut bytes = b"BM".to_vec();
    bytes.extend_from_slice(&[0; 12]);
    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes
}

fn jpeg_header(width: u16, height: u16) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xD8];
    // APP0 segment with a dummy payload
    bytes.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x06, b'J', b'F', b'I', b'F']);
    // SOF0: length, precision, height, width, components
    bytes.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&[0x03; 12]);
    bytes
}

/// Baseline JPEG whose APP1 segment holds a little-endian TIFF block with
/// a single IFD0 `Make` entry.
fn jpeg_with_exif(make: &[u8; 3], width: u16, height: u16) -> Vec<u8> {
    let mut tiff = b"II*\0".to_vec();
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x010Fu16.to_le_bytes());
    tiff.extend_from_slice(&2u16.to_le_bytes());
    tiff.extend_from_slice(&4u32.to_le_bytes());
    tiff.extend_from_slice(make);
    tiff.push(0);
    tiff.extend_from_slice(&0u32.to_le_bytes());

    let mut app1 = b"Exif\0\0".to_vec();
    app1.extend_from_slice(&tiff);

    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE1];
    bytes.extend_from_slice(&(app1.len() as u16 + 2).to_be_bytes());
    bytes.extend_from_slice(&app1);
    // SOF0 with one grayscale component
    bytes.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x0B, 0x08]);
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&[0x01, 0x01, 0x11, 0x00]);
    bytes.extend_from_slice(&[0xFF, 0xD9]);
    bytes
}

fn write(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn reports_size_format_and_dimensions() {
    let temp = TempDir::new().unwrap();
    let cases = [
        ("a.png", png_header(640, 480), ImageFormat::Png, (640, 480), Some("RGBA")),
        ("b.GIF", gif_header(32, 16), ImageFormat::Gif, (32, 16), Some("P")),
        ("c.bmp", bmp_header(100, -50), ImageFormat::Bmp, (100, 50), None),
        ("d.jpeg", jpeg_header(1920, 1080), ImageFormat::Jpeg, (1920, 1080), Some("RGB")),
    ];

    for (name, bytes, format, dimensions, mode) in cases {
        let path = write(temp.path(), name, &bytes);
        let attrs = inspect_file(&path).unwrap();
        assert_eq!(attrs.path, path);
        assert_eq!(attrs.size_bytes, bytes.len() as u64);
        assert_eq!(attrs.format, format, "{name}");
        assert_eq!(attrs.dimensions, Some(dimensions), "{name}");
        assert_eq!(attrs.mode, mode, "{name}");
        assert!(attrs.exif.is_empty(), "{name}");
        assert!(attrs.modified.is_some());
    }
}

#[test]
fn unrecognized_content_is_reported_without_dimensions() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "fake.jpg", b"definitely not a jpeg");
    let attrs = inspect_file(&path).unwrap();
    assert_eq!(attrs.format, ImageFormat::Unknown);
    assert_eq!(attrs.dimensions, None);
}

#[test]
fn missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = inspect_file(&temp.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, InspectError::Missing(_)));
}

#[test]
fn non_image_extension_is_skipped() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "notes.txt", b"hello");
    let err = inspect_file(&path).unwrap_err();
    assert!(matches!(err, InspectError::NotAnImage(_)));
    assert!(!has_image_extension(&path));
    assert!(has_image_extension(Path::new("photo.JPG")));
}

#[test]
fn exif_tags_are_reported_by_name() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "shot.jpg", &jpeg_with_exif(b"Cam", 4, 3));

    let attrs = inspect_file(&path).unwrap();
    assert_eq!(attrs.format, ImageFormat::Jpeg);
    assert_eq!(attrs.dimensions, Some((4, 3)));
    assert_eq!(attrs.mode, Some("L"));
    assert_eq!(attrs.exif.len(), 1);
    assert_eq!(attrs.exif[0].tag, "Make");
    assert!(attrs.exif[0].value.contains("Cam"), "{:?}", attrs.exif[0]);
}

#[test]
fn file_without_exif_yields_no_tags() {
    let temp = TempDir::new().unwrap();
    let plain = write(temp.path(), "plain.jpg", &jpeg_header(8, 8));
    let bogus = write(temp.path(), "bogus.png", b"not an image at all");

    assert_eq!(read_exif(&plain).unwrap(), Vec::<ExifField>::new());
    assert_eq!(read_exif(&bogus).unwrap(), Vec::<ExifField>::new());
    assert!(read_exif(&temp.path().join("gone.jpg")).is_err());
}
