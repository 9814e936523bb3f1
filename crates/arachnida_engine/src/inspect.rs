use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use arachnida_core::IMAGE_EXTENSIONS;
use crawl_logging::{crawl_debug, crawl_warn};
use thiserror::Error;

/// JPEG frame headers can sit behind large APPn segments, so read generously.
const HEADER_LIMIT: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Unknown,
}

impl ImageFormat {
    pub fn sniff(header: &[u8]) -> Self {
        if header.starts_with(&[0xFF, 0xD8, 0xFF]) {
            ImageFormat::Jpeg
        } else if header.starts_with(b"\x89PNG\r\n\x1a\n") {
            ImageFormat::Png
        } else if header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a") {
            ImageFormat::Gif
        } else if header.starts_with(b"BM") {
            ImageFormat::Bmp
        } else {
            ImageFormat::Unknown
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Bmp => "BMP",
            ImageFormat::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttributes {
    pub path: PathBuf,
    pub size_bytes: u64,
    /// Not every platform or filesystem records a birth time.
    pub created: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    pub format: ImageFormat,
    /// (width, height) in pixels, when the header carries them.
    pub dimensions: Option<(u32, u32)>,
    /// Pixel layout such as `RGB`, `RGBA`, `L` (grayscale) or `P` (palette).
    pub mode: Option<&'static str>,
    /// Primary-image EXIF tags in file order; empty when the file has none.
    pub exif: Vec<ExifField>,
}

/// One EXIF tag rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExifField {
    pub tag: String,
    pub value: String,
}

#[derive(Debug, Default)]
struct HeaderInfo {
    dimensions: Option<(u32, u32)>,
    mode: Option<&'static str>,
}

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("file {0} does not exist")]
    Missing(PathBuf),
    #[error("skipping non-image file: {0}")]
    NotAnImage(PathBuf),
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn has_image_extension(path: &Path) -> bool {
    let name = path.to_string_lossy().to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Basic attributes of a local image file.
pub fn inspect_file(path: &Path) -> Result<FileAttributes, InspectError> {
    if !path.is_file() {
        return Err(InspectError::Missing(path.to_path_buf()));
    }
    if !has_image_extension(path) {
        return Err(InspectError::NotAnImage(path.to_path_buf()));
    }
    let io_err = |source| InspectError::Io {
        path: path.to_path_buf(),
        source,
    };

    let meta = fs::metadata(path).map_err(io_err)?;
    let mut header = Vec::new();
    File::open(path)
        .map_err(io_err)?
        .take(HEADER_LIMIT)
        .read_to_end(&mut header)
        .map_err(io_err)?;

    let format = ImageFormat::sniff(&header);
    let info = match format {
        ImageFormat::Png => png_header(&header),
        ImageFormat::Gif => gif_header(&header),
        ImageFormat::Bmp => bmp_header(&header),
        ImageFormat::Jpeg => jpeg_header(&header),
        ImageFormat::Unknown => HeaderInfo::default(),
    };
    let exif = read_exif(path).map_err(io_err)?;

    Ok(FileAttributes {
        path: path.to_path_buf(),
        size_bytes: meta.len(),
        created: meta.created().ok(),
        modified: meta.modified().ok(),
        format,
        dimensions: info.dimensions,
        mode: info.mode,
        exif,
    })
}

/// Reads the EXIF block of a JPEG, PNG, TIFF, HEIF or WebP file.
///
/// A missing or malformed block yields an empty list; only failing to open
/// the file is an error.
pub fn read_exif(path: &Path) -> io::Result<Vec<ExifField>> {
    let mut reader = BufReader::new(File::open(path)?);
    let data = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(data) => data,
        Err(exif::Error::NotFound(_) | exif::Error::InvalidFormat(_)) => {
            crawl_debug!("{}: no EXIF block", path.display());
            return Ok(Vec::new());
        }
        Err(err) => {
            crawl_warn!("Error reading EXIF data from {}: {}", path.display(), err);
            return Ok(Vec::new());
        }
    };

    Ok(data
        .fields()
        .filter(|field| field.ifd_num == exif::In::PRIMARY)
        .map(|field| ExifField {
            tag: field.tag.to_string(),
            value: field.display_value().with_unit(&data).to_string(),
        })
        .collect())
}

fn be_u16(bytes: &[u8], at: usize) -> Option<u16> {
    bytes.get(at..at + 2).map(|b| u16::from_be_bytes([b[0], b[1]]))
}

fn le_u16(bytes: &[u8], at: usize) -> Option<u16> {
    bytes.get(at..at + 2).map(|b| u16::from_le_bytes([b[0], b[1]]))
}

fn be_u32(bytes: &[u8], at: usize) -> Option<u32> {
    bytes
        .get(at..at + 4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

fn le_u32(bytes: &[u8], at: usize) -> Option<u32> {
    bytes
        .get(at..at + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn png_header(header: &[u8]) -> HeaderInfo {
    if header.get(12..16) != Some(b"IHDR".as_slice()) {
        return HeaderInfo::default();
    }
    let dimensions = be_u32(header, 16).zip(be_u32(header, 20));
    let mode = header.get(25).and_then(|color_type| match color_type {
        0 => Some("L"),
        2 => Some("RGB"),
        3 => Some("P"),
        4 => Some("LA"),
        6 => Some("RGBA"),
        _ => None,
    });
    HeaderInfo { dimensions, mode }
}

fn gif_header(header: &[u8]) -> HeaderInfo {
    let width = le_u16(header, 6).map(u32::from);
    let height = le_u16(header, 8).map(u32::from);
    HeaderInfo {
        dimensions: width.zip(height),
        mode: Some("P"),
    }
}

fn bmp_header(header: &[u8]) -> HeaderInfo {
    let Some(dib_size) = le_u32(header, 14) else {
        return HeaderInfo::default();
    };
    let (dimensions, bits_at) = if dib_size == 12 {
        // OS/2 BITMAPCOREHEADER
        let width = le_u16(header, 18).map(u32::from);
        let height = le_u16(header, 20).map(u32::from);
        (width.zip(height), 24)
    } else {
        let width = le_u32(header, 18).map(|w| (w as i32).unsigned_abs());
        // Negative height marks a top-down bitmap.
        let height = le_u32(header, 22).map(|h| (h as i32).unsigned_abs());
        (width.zip(height), 28)
    };
    let mode = le_u16(header, bits_at).and_then(|bits| match bits {
        1 | 4 | 8 => Some("P"),
        16 | 24 | 32 => Some("RGB"),
        _ => None,
    });
    HeaderInfo { dimensions, mode }
}

fn jpeg_header(header: &[u8]) -> HeaderInfo {
    let mut pos = 2;
    while pos + 1 < header.len() {
        if header[pos] != 0xFF {
            break;
        }
        let marker = header[pos + 1];
        match marker {
            0xFF => {
                pos += 1;
                continue;
            }
            0x01 | 0xD0..=0xD8 => {
                pos += 2;
                continue;
            }
            0xD9 | 0xDA => break,
            _ => {}
        }
        let Some(segment_len) = be_u16(header, pos + 2) else {
            break;
        };
        let is_frame_header =
            matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC);
        if is_frame_header {
            let height = be_u16(header, pos + 5).map(u32::from);
            let width = be_u16(header, pos + 7).map(u32::from);
            let mode = header.get(pos + 9).and_then(|components| match components {
                1 => Some("L"),
                3 => Some("RGB"),
                4 => Some("CMYK"),
                _ => None,
            });
            return HeaderInfo {
                dimensions: width.zip(height),
                mode,
            };
        }
        pos += 2 + usize::from(segment_len);
    }
    HeaderInfo::default()
}
