use std::fs;
use std::path::PathBuf;

use arachnida_app::cli::ScorpionArgs;
use arachnida_app::report::FileReport;
use arachnida_app::scorpion::collect_reports;
use arachnida_engine::{ExifField, FileAttributes, ImageFormat};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn gif_bytes(width: u16, height: u16) -> Vec<u8> {
    let mut bytes = b"GIF89a".to_vec();
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0]);
    bytes
}

#[test]
fn text_report_lists_attributes() {
    let attrs = FileAttributes {
        path: PathBuf::from("cat.png"),
        size_bytes: 1234,
        created: None,
        modified: None,
        format: ImageFormat::Png,
        dimensions: Some((640, 480)),
        mode: Some("RGBA"),
        exif: vec![
            ExifField {
                tag: "Make".to_string(),
                value: "\"Cam\"".to_string(),
            },
            ExifField {
                tag: "Orientation".to_string(),
                value: "row 0 at top and column 0 at left".to_string(),
            },
        ],
    };
    let report = FileReport::from(&attrs);

    assert_eq!(
        report.to_string(),
        "File: cat.png\n\
         Size: 1234 bytes\n\
         Format: PNG\n\
         Mode: RGBA\n\
         Dimensions: 640x480 pixels\n\
         Created: unavailable\n\
         Last Modified: unavailable\n\
         EXIF Data:\n  \
         Make: \"Cam\"\n  \
         Orientation: row 0 at top and column 0 at left\n"
    );
}

#[test]
fn json_report_has_stable_keys() {
    let attrs = FileAttributes {
        path: PathBuf::from("x.bmp"),
        size_bytes: 10,
        created: None,
        modified: None,
        format: ImageFormat::Unknown,
        dimensions: None,
        mode: None,
        exif: Vec::new(),
    };
    let value = serde_json::to_value(FileReport::from(&attrs)).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "file": "x.bmp",
            "size_bytes": 10,
            "format": "unknown",
            "mode": null,
            "width": null,
            "height": null,
            "created": null,
            "modified": null,
            "exif": [],
        })
    );
}

#[test]
fn collect_reports_continues_past_bad_files() {
    let dir = TempDir::new().unwrap();
    let gif = dir.path().join("anim.gif");
    let text = dir.path().join("notes.txt");
    fs::write(&gif, gif_bytes(3, 2)).unwrap();
    fs::write(&text, b"hello").unwrap();

    let args = ScorpionArgs {
        files: vec![dir.path().join("missing.jpg"), text, gif],
        json: false,
    };
    let (reports, failures) = collect_reports(&args);

    assert_eq!(failures, 1);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].format, "GIF");
    assert_eq!(reports[0].mode.as_deref(), Some("P"));
    assert!(reports[0].exif.is_empty());
    assert_eq!((reports[0].width, reports[0].height), (Some(3), Some(2)));
    assert!(reports[0].modified.is_some());
}
