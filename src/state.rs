use crate::model::{ByteBuffer, Edit, EditError, EditLog};
use crate::persistence::{self, FileError};
use crate::search;
use std::path::{Path, PathBuf};

/// Everything needed to represent one editing session: the file's bytes,
/// their edit history and where they are saved.
///
/// Cursor and scroll position are not here; they belong to the shell.
pub struct EditorSession {
    /// The bytes being edited
    pub buffer: ByteBuffer,

    /// Undo/redo history for `buffer`
    pub log: EditLog,

    path: PathBuf,
}

impl EditorSession {
    /// Create a session over bytes that are not yet on disk
    pub fn new(path: impl Into<PathBuf>, buffer: ByteBuffer) -> Self {
        Self {
            buffer,
            log: EditLog::new(),
            path: path.into(),
        }
    }

    /// Load `path` and start with an empty history
    pub fn open(path: &Path) -> Result<Self, FileError> {
        let buffer = persistence::load(path)?;
        Ok(Self::new(path, buffer))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the buffer back to its file. On failure nothing in memory changes.
    pub fn save(&mut self) -> Result<(), FileError> {
        persistence::save(&self.path, &self.buffer)?;
        self.log.mark_saved();
        Ok(())
    }

    /// True when the buffer differs from what was last loaded or saved
    pub fn is_modified(&self) -> bool {
        !self.log.is_at_saved_point()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn read(&self, offset: usize) -> Result<u8, EditError> {
        self.buffer.read(offset)
    }

    pub fn overwrite(&mut self, offset: usize, value: u8) -> Result<(), EditError> {
        self.log.apply_overwrite(&mut self.buffer, offset, value)
    }

    pub fn insert(&mut self, offset: usize, bytes: &[u8]) -> Result<(), EditError> {
        self.log.apply_insert(&mut self.buffer, offset, bytes)
    }

    pub fn delete(&mut self, offset: usize, count: usize) -> Result<usize, EditError> {
        self.log.apply_delete(&mut self.buffer, offset, count)
    }

    pub fn undo(&mut self) -> Result<Edit, EditError> {
        self.log.undo(&mut self.buffer)
    }

    pub fn redo(&mut self) -> Result<Edit, EditError> {
        self.log.redo(&mut self.buffer)
    }

    /// Forward search for `pattern` starting at `start`
    pub fn find(&self, pattern: &[u8], start: usize) -> Option<usize> {
        search::find_bytes(&self.buffer, pattern, start)
    }
}
