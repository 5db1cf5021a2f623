use super::buffer::ByteBuffer;
use super::error::EditError;

/// A single reversible change to a [`ByteBuffer`].
///
/// Each variant carries enough data both to redo and to undo itself:
/// the inverse of an `Insert` deletes the same run, the inverse of a
/// `Delete` puts the removed run back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    /// One byte replaced in place
    Overwrite { offset: usize, old: u8, new: u8 },
    /// `bytes` spliced in starting at `offset`
    Insert { offset: usize, bytes: Vec<u8> },
    /// `bytes` removed starting at `offset`
    Delete { offset: usize, bytes: Vec<u8> },
}

impl Edit {
    /// Offset of the first byte touched by this edit
    pub fn offset(&self) -> usize {
        match self {
            Edit::Overwrite { offset, .. }
            | Edit::Insert { offset, .. }
            | Edit::Delete { offset, .. } => *offset,
        }
    }

    /// Change in buffer length caused by applying this edit
    pub fn len_delta(&self) -> isize {
        match self {
            Edit::Overwrite { .. } => 0,
            Edit::Insert { bytes, .. } => bytes.len() as isize,
            Edit::Delete { bytes, .. } => -(bytes.len() as isize),
        }
    }

    /// Re-apply the forward effect of this edit
    pub(crate) fn apply(&self, buffer: &mut ByteBuffer) -> Result<(), EditError> {
        match self {
            Edit::Overwrite { offset, new, .. } => buffer.overwrite(*offset, *new).map(|_| ()),
            Edit::Insert { offset, bytes } => buffer.insert(*offset, bytes),
            Edit::Delete { offset, bytes } => buffer.delete(*offset, bytes.len()).map(|_| ()),
        }
    }

    /// Apply the inverse of this edit
    pub(crate) fn revert(&self, buffer: &mut ByteBuffer) -> Result<(), EditError> {
        match self {
            Edit::Overwrite { offset, old, .. } => buffer.overwrite(*offset, *old).map(|_| ()),
            Edit::Insert { offset, bytes } => buffer.delete(*offset, bytes.len()).map(|_| ()),
            Edit::Delete { offset, bytes } => buffer.insert(*offset, bytes),
        }
    }
}
