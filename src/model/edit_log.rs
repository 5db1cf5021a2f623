//! Linear undo/redo history for a [`ByteBuffer`].
//!
//! Every mutation goes through [`EditLog`], which applies it to the buffer and
//! records an [`Edit`] only after the buffer accepted it. Recording a new edit
//! discards the redo stack: there is no branching history.

use super::buffer::ByteBuffer;
use super::edit::Edit;
use super::error::EditError;

#[derive(Debug, Clone)]
pub struct EditLog {
    /// Applied edits, most recent last
    undo_stack: Vec<Edit>,
    /// Undone edits, most recently undone last
    redo_stack: Vec<Edit>,
    /// `undo_stack.len()` at the last save; `None` once that state can no longer be reached
    saved_depth: Option<usize>,
}

impl Default for EditLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EditLog {
    /// Create an empty log whose saved point is the initial state
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            saved_depth: Some(0),
        }
    }

    /// Overwrite one byte and record the change
    pub fn apply_overwrite(
        &mut self,
        buffer: &mut ByteBuffer,
        offset: usize,
        new: u8,
    ) -> Result<(), EditError> {
        let old = buffer.overwrite(offset, new)?;
        self.record(Edit::Overwrite { offset, old, new });
        Ok(())
    }

    /// Insert `bytes` at `offset` and record the change. Empty input is not recorded.
    pub fn apply_insert(
        &mut self,
        buffer: &mut ByteBuffer,
        offset: usize,
        bytes: &[u8],
    ) -> Result<(), EditError> {
        if bytes.is_empty() {
            return Ok(());
        }
        buffer.insert(offset, bytes)?;
        self.record(Edit::Insert {
            offset,
            bytes: bytes.to_vec(),
        });
        Ok(())
    }

    /// Delete `count` bytes at `offset` and record what was removed.
    ///
    /// Returns the number of bytes actually removed; a no-op delete is not recorded.
    pub fn apply_delete(
        &mut self,
        buffer: &mut ByteBuffer,
        offset: usize,
        count: usize,
    ) -> Result<usize, EditError> {
        let bytes = buffer.delete(offset, count)?;
        let removed = bytes.len();
        if removed > 0 {
            self.record(Edit::Delete { offset, bytes });
        }
        Ok(removed)
    }

    /// Revert the most recent edit and move it onto the redo stack.
    ///
    /// Returns the edit that was undone.
    pub fn undo(&mut self, buffer: &mut ByteBuffer) -> Result<Edit, EditError> {
        let edit = self.undo_stack.last().ok_or(EditError::NothingToUndo)?;
        edit.revert(buffer)?;
        let edit = self.undo_stack.pop().ok_or(EditError::NothingToUndo)?;
        self.redo_stack.push(edit.clone());
        Ok(edit)
    }

    /// Re-apply the most recently undone edit and move it back onto the undo stack.
    ///
    /// Returns the edit that was redone.
    pub fn redo(&mut self, buffer: &mut ByteBuffer) -> Result<Edit, EditError> {
        let edit = self.redo_stack.last().ok_or(EditError::NothingToRedo)?;
        edit.apply(buffer)?;
        let edit = self.redo_stack.pop().ok_or(EditError::NothingToRedo)?;
        self.undo_stack.push(edit.clone());
        Ok(edit)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most recently applied edit
    pub fn last_applied(&self) -> Option<&Edit> {
        self.undo_stack.last()
    }

    /// Forget all history. The current state becomes the saved point.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.saved_depth = Some(0);
    }

    /// Remember the current position as the one matching the file on disk
    pub fn mark_saved(&mut self) {
        self.saved_depth = Some(self.undo_stack.len());
    }

    /// True when undo/redo has brought the buffer back to its last saved contents
    pub fn is_at_saved_point(&self) -> bool {
        self.saved_depth == Some(self.undo_stack.len())
    }

    fn record(&mut self, edit: Edit) {
        // The saved state lived in the redo branch we are about to drop
        if matches!(self.saved_depth, Some(depth) if depth > self.undo_stack.len()) {
            self.saved_depth = None;
        }
        self.redo_stack.clear();
        self.undo_stack.push(edit);
    }
}
