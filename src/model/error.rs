/// Errors produced by the byte buffer and the edit log.
///
/// All of them are recoverable: the shell reports them and keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// `offset` (and `count` bytes after it) do not fit inside a buffer of `len` bytes
    OutOfRange {
        offset: usize,
        count: usize,
        len: usize,
    },
    NothingToUndo,
    NothingToRedo,
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::OutOfRange { offset, count, len } => write!(
                f,
                "Offset out of range: 0x{offset:x} (+{count}) exceeds buffer of {len} bytes"
            ),
            EditError::NothingToUndo => write!(f, "Nothing to undo"),
            EditError::NothingToRedo => write!(f, "Nothing to redo"),
        }
    }
}

impl std::error::Error for EditError {}
