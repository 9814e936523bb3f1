use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::filename::numbered_variant;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Creates `dir` when absent and checks that a file can be created in it.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Content written to a path that did not exist before.
    Written(PathBuf),
    /// Identical content already present at this path; nothing written.
    Duplicate(PathBuf),
}

enum Slot {
    Free,
    SameContent,
    Taken,
}

/// Writes downloaded images into one directory without ever overwriting.
///
/// A name collision with identical bytes is a duplicate; with different
/// bytes the next `{stem}(n){ext}` candidate is tried, starting at n = 1.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        ensure_output_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn save(&self, filename: &str, content: &[u8]) -> Result<SaveOutcome, PersistError> {
        let mut index = 0;
        loop {
            let candidate = if index == 0 {
                self.dir.join(filename)
            } else {
                self.dir.join(numbered_variant(filename, index))
            };
            match inspect_slot(&candidate, content)? {
                Slot::Free => {
                    self.write_new(&candidate, content)?;
                    return Ok(SaveOutcome::Written(candidate));
                }
                Slot::SameContent => return Ok(SaveOutcome::Duplicate(candidate)),
                Slot::Taken => index += 1,
            }
        }
    }

    /// Write through a temp file in the same directory, then move it into
    /// place only if `target` is still absent.
    fn write_new(&self, target: &Path, content: &[u8]) -> Result<(), PersistError> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist_noclobber(target)
            .map_err(|e| PersistError::Io(e.error))?;
        Ok(())
    }
}

fn inspect_slot(path: &Path, content: &[u8]) -> Result<Slot, PersistError> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Slot::Free),
        Err(err) => return Err(err.into()),
    };
    if !meta.is_file() || meta.len() != content.len() as u64 {
        return Ok(Slot::Taken);
    }
    if fs::read(path)? == content {
        Ok(Slot::SameContent)
    } else {
        Ok(Slot::Taken)
    }
}
