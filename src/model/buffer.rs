use super::error::EditError;

/// The in-memory bytes of the file being edited.
///
/// Every mutating method checks its bounds before touching any byte, so a
/// failed call leaves the buffer exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer that takes ownership of `data`
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the byte at `offset`
    pub fn read(&self, offset: usize) -> Result<u8, EditError> {
        self.data
            .get(offset)
            .copied()
            .ok_or_else(|| self.out_of_range(offset, 1))
    }

    /// Replace the byte at `offset`, returning the value it replaced
    pub fn overwrite(&mut self, offset: usize, value: u8) -> Result<u8, EditError> {
        let len = self.data.len();
        let slot = self.data.get_mut(offset).ok_or(EditError::OutOfRange {
            offset,
            count: 1,
            len,
        })?;
        Ok(std::mem::replace(slot, value))
    }

    /// Splice `bytes` in at `offset`. Inserting at `len()` appends.
    pub fn insert(&mut self, offset: usize, bytes: &[u8]) -> Result<(), EditError> {
        if offset > self.data.len() {
            return Err(self.out_of_range(offset, bytes.len()));
        }
        self.data.splice(offset..offset, bytes.iter().copied());
        Ok(())
    }

    /// Remove `count` bytes starting at `offset` and return them.
    ///
    /// Deleting nothing, or deleting from an empty buffer, is a no-op that
    /// returns an empty run.
    pub fn delete(&mut self, offset: usize, count: usize) -> Result<Vec<u8>, EditError> {
        if count == 0 || self.data.is_empty() {
            return Ok(Vec::new());
        }
        match offset.checked_add(count) {
            Some(end) if end <= self.data.len() => Ok(self.data.drain(offset..end).collect()),
            _ => Err(self.out_of_range(offset, count)),
        }
    }

    /// Borrow the current contents without copying
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Copy of the current contents, used when writing to disk
    pub fn snapshot(&self) -> Vec<u8> {
        self.data.clone()
    }

    fn out_of_range(&self, offset: usize, count: usize) -> EditError {
        EditError::OutOfRange {
            offset,
            count,
            len: self.data.len(),
        }
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}
