// SPDX-License-Identifier: Apache-2.0

use crate::number_parser::NumberExtractor;

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data.
    ReachedEnd,
}

/// A character source the parser reads from.
///
/// Positions are byte offsets; `restore` rewinds to any offset previously
/// returned by `current_pos`, which is how every failed alternative backtracks.
pub trait InputBuffer {
    /// Look at the next byte without consuming it.
    fn peek(&self) -> Option<u8>;
    /// Consume and return the next byte.
    fn consume_byte(&mut self) -> Result<u8, Error>;
    fn current_pos(&self) -> usize;
    /// Rewind (or fast-forward) to a position obtained from `current_pos`.
    fn restore(&mut self, pos: usize);

    /// Skip the same whitespace set as C's `isspace` in the "C" locale.
    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)) {
            let _ = self.consume_byte();
        }
    }

    /// Token matcher: skip whitespace, then consume exactly `pattern`.
    ///
    /// On mismatch or exhaustion every byte consumed by this attempt is given
    /// back, leaving the cursor just past the skipped whitespace. The skipped
    /// whitespace itself stays consumed.
    fn match_literal(&mut self, pattern: &[u8]) -> bool {
        self.skip_whitespace();
        let start = self.current_pos();
        for &expected in pattern {
            match self.consume_byte() {
                Ok(byte) if byte == expected => {}
                _ => {
                    self.restore(start);
                    return false;
                }
            }
        }
        true
    }
}

/// A buffer that manages input data and current parsing position.
/// This encapsulates the data slice and position that are always used together.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl InputBuffer for SliceInputBuffer<'_> {
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn consume_byte(&mut self) -> Result<u8, Error> {
        let byte = self.peek().ok_or(Error::ReachedEnd)?;
        self.pos += 1;
        Ok(byte)
    }

    fn current_pos(&self) -> usize {
        self.pos
    }

    fn restore(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer with the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Gets a slice of the data from start to end positions, with bounds checking.
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a [u8]> {
        self.data.get(start..end)
    }

    /// Gets the length of the underlying data for bounds checking.
    pub fn data_len(&self) -> usize {
        self.data.len()
    }
}

impl NumberExtractor for SliceInputBuffer<'_> {
    fn get_number_slice(&self, start: usize, end: usize) -> Option<&[u8]> {
        self.slice(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_boundary_behavior() {
        let data = b"abc";
        let mut buffer = SliceInputBuffer::new(data);

        assert_eq!(buffer.current_pos(), 0);
        assert_eq!(buffer.peek(), Some(b'a'));
        assert_eq!(buffer.consume_byte(), Ok(b'a'));
        assert_eq!(buffer.consume_byte(), Ok(b'b'));
        assert_eq!(buffer.consume_byte(), Ok(b'c'));

        // Exhaustion is reported without moving past the end
        assert_eq!(buffer.current_pos(), data.len());
        assert_eq!(buffer.peek(), None);
        assert_eq!(buffer.consume_byte(), Err(Error::ReachedEnd));
        assert_eq!(buffer.current_pos(), data.len());
    }

    #[test]
    fn test_restore_clamps_to_data_len() {
        let mut buffer = SliceInputBuffer::new(b"xy");
        buffer.restore(10);
        assert_eq!(buffer.current_pos(), 2);
        buffer.restore(1);
        assert_eq!(buffer.consume_byte(), Ok(b'y'));
    }

    #[test]
    fn test_match_literal_success_leaves_cursor_after_token() {
        let mut buffer = SliceInputBuffer::new(b"  \t\ntrue,");
        assert!(buffer.match_literal(b"true"));
        assert_eq!(buffer.peek(), Some(b','));
    }

    #[test]
    fn test_match_literal_failure_keeps_whitespace_skipped() {
        let mut buffer = SliceInputBuffer::new(b"   trux");
        assert!(!buffer.match_literal(b"true"));
        // The partial "tru" is given back, the leading spaces are not
        assert_eq!(buffer.current_pos(), 3);
        assert_eq!(buffer.peek(), Some(b't'));

        // Retrying is idempotent
        assert!(!buffer.match_literal(b"true"));
        assert_eq!(buffer.current_pos(), 3);
    }

    #[test]
    fn test_match_literal_premature_end() {
        let mut buffer = SliceInputBuffer::new(b"nul");
        assert!(!buffer.match_literal(b"null"));
        assert_eq!(buffer.current_pos(), 0);
    }

    #[test]
    fn test_skip_whitespace_includes_vertical_tab_and_form_feed() {
        let mut buffer = SliceInputBuffer::new(b"\x0b\x0c\r 1");
        buffer.skip_whitespace();
        assert_eq!(buffer.peek(), Some(b'1'));
    }
}
