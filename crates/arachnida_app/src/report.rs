use std::fmt;
use std::time::SystemTime;

use arachnida_engine::{ExifField, FileAttributes};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Printable view of one inspected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: String,
    pub size_bytes: u64,
    pub format: String,
    pub mode: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub created: Option<String>,
    pub modified: Option<String>,
    pub exif: Vec<ExifLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExifLine {
    pub tag: String,
    pub value: String,
}

impl From<&ExifField> for ExifLine {
    fn from(field: &ExifField) -> Self {
        Self {
            tag: field.tag.clone(),
            value: field.value.clone(),
        }
    }
}

impl From<&FileAttributes> for FileReport {
    fn from(attrs: &FileAttributes) -> Self {
        Self {
            file: attrs.path.display().to_string(),
            size_bytes: attrs.size_bytes,
            format: attrs.format.name().to_string(),
            mode: attrs.mode.map(str::to_string),
            width: attrs.dimensions.map(|(w, _)| w),
            height: attrs.dimensions.map(|(_, h)| h),
            created: attrs.created.map(local_timestamp),
            modified: attrs.modified.map(local_timestamp),
            exif: attrs.exif.iter().map(ExifLine::from).collect(),
        }
    }
}

fn local_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time).to_rfc3339()
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}", self.file)?;
        writeln!(f, "Size: {} bytes", self.size_bytes)?;
        writeln!(f, "Format: {}", self.format)?;
        writeln!(f, "Mode: {}", self.mode.as_deref().unwrap_or("unknown"))?;
        match (self.width, self.height) {
            (Some(w), Some(h)) => writeln!(f, "Dimensions: {w}x{h} pixels")?,
            _ => writeln!(f, "Dimensions: unknown")?,
        }
        writeln!(
            f,
            "Created: {}",
            self.created.as_deref().unwrap_or("unavailable")
        )?;
        writeln!(
            f,
            "Last Modified: {}",
            self.modified.as_deref().unwrap_or("unavailable")
        )?;
        if !self.exif.is_empty() {
            writeln!(f, "EXIF Data:")?;
            for line in &self.exif {
                writeln!(f, "  {}: {}", line.tag, line.value)?;
            }
        }
        Ok(())
    }
}
