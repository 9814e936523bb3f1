use std::path::Path;

use url::Url;

const FALLBACK_NAME: &str = "image";

/// Keep alphanumerics, spaces, periods and underscores; trim trailing
/// whitespace; escape any remaining double quote.
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '_'))
        .collect();
    kept.trim_end().replace('"', "&quot;")
}

/// Destination filename for an image: its final path segment, sanitized.
pub fn image_filename(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");
    let sanitized = sanitize_filename(segment);
    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        FALLBACK_NAME.to_string()
    } else {
        sanitized
    }
}

/// `photo.png` with index 2 becomes `photo(2).png`.
pub fn numbered_variant(filename: &str, index: usize) -> String {
    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}({index}).{ext}"),
        None => format!("{stem}({index})"),
    }
}
