//! Forward byte-pattern search over a [`ByteBuffer`].
//!
//! ASCII and hex searches are the same operation: the shell turns the typed
//! text into bytes (directly, or through [`parse_hex_bytes`]) and then calls
//! [`find_bytes`].
//!
//! [`parse_hex_bytes`]: crate::primitives::hex::parse_hex_bytes

use crate::model::ByteBuffer;

/// Offset of the first occurrence of `pattern` at or after `start`.
///
/// Returns `None` when `start` is past the end of the buffer or nothing
/// matches. An empty pattern matches at `start` when `start < len`.
pub fn find_bytes(buffer: &ByteBuffer, pattern: &[u8], start: usize) -> Option<usize> {
    let haystack = buffer.as_slice();
    if start > haystack.len() {
        return None;
    }
    if pattern.is_empty() {
        return (start < haystack.len()).then_some(start);
    }
    haystack[start..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|pos| start + pos)
}

/// Search for the byte representation of `text`
pub fn find_text(buffer: &ByteBuffer, text: &str, start: usize) -> Option<usize> {
    find_bytes(buffer, text.as_bytes(), start)
}
