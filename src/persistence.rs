//! Whole-file transfer between disk and a [`ByteBuffer`].

use crate::model::ByteBuffer;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Which step of the transfer failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    Open,
    Read,
    Write,
}

/// A file could not be loaded or saved
#[derive(Debug)]
pub struct FileError {
    pub path: PathBuf,
    pub kind: FileErrorKind,
    pub source: io::Error,
}

impl FileError {
    fn new(path: &Path, kind: FileErrorKind, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
            source,
        }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let action = match self.kind {
            FileErrorKind::Open => "open",
            FileErrorKind::Read => "read",
            FileErrorKind::Write => "write",
        };
        write!(
            f,
            "Cannot {action} {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Read the entire file at `path` into a new buffer
pub fn load(path: &Path) -> Result<ByteBuffer, FileError> {
    let mut file = File::open(path).map_err(|e| FileError::new(path, FileErrorKind::Open, e))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| FileError::new(path, FileErrorKind::Read, e))?;
    Ok(ByteBuffer::from_bytes(data))
}

/// Write the full contents of `buffer` to `path`, replacing whatever was there
pub fn save(path: &Path, buffer: &ByteBuffer) -> Result<(), FileError> {
    let mut file =
        File::create(path).map_err(|e| FileError::new(path, FileErrorKind::Open, e))?;
    file.write_all(buffer.as_slice())
        .and_then(|()| file.flush())
        .map_err(|e| FileError::new(path, FileErrorKind::Write, e))
}
