//! Sentinel bytes and the forward cursor used by the TAL parsers.

/// Separates the onset from the duration inside a timestamp.
pub const TOKEN_ONSET: u8 = 0x15;
/// Terminates the timestamp and each annotation text.
pub const TOKEN_ANNOTATION: u8 = 0x14;
/// Padding after the last annotation of a timestamp.
pub const TOKEN_END: u8 = 0x00;

pub(crate) fn is_sentinel(byte: u8) -> bool {
    matches!(byte, TOKEN_END | TOKEN_ANNOTATION | TOKEN_ONSET)
}

/// Forward-only cursor over a TAL byte slice.
///
/// Running out of input is not an error at this layer; `peek` and
/// `next_sentinel` report it and the caller decides what it means.
pub(crate) struct Scanner<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Scanner { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Steps over the byte at the cursor.
    pub fn bump(&mut self) {
        debug_assert!(self.pos < self.buf.len());
        self.pos += 1;
    }

    /// Advances to the next sentinel byte and returns the run of plain
    /// bytes skipped plus the sentinel found, or `None` when the slice is
    /// exhausted first. The cursor is left *on* the sentinel.
    pub fn next_sentinel(&mut self) -> (&'a [u8], Option<u8>) {
        let start = self.pos;
        while self.pos < self.buf.len() && !is_sentinel(self.buf[self.pos]) {
            self.pos += 1;
        }
        (&self.buf[start..self.pos], self.peek())
    }

    /// Consumes consecutive END bytes, returning how many were eaten.
    pub fn eat_end_padding(&mut self) -> usize {
        let start = self.pos;
        while self.peek() == Some(TOKEN_END) {
            self.pos += 1;
        }
        self.pos - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sentinel_finds_each_token() {
        for token in [TOKEN_END, TOKEN_ANNOTATION, TOKEN_ONSET] {
            let buf = [b'a', b'b', token, b'c'];
            let mut scanner = Scanner::new(&buf);
            let (run, found) = scanner.next_sentinel();
            assert_eq!(run, b"ab");
            assert_eq!(found, Some(token));
            assert_eq!(scanner.pos(), 2);
        }
    }

    #[test]
    fn test_next_sentinel_end_of_input() {
        let mut scanner = Scanner::new(b"plain");
        let (run, found) = scanner.next_sentinel();
        assert_eq!(run, b"plain");
        assert_eq!(found, None);
        assert_eq!(scanner.pos(), 5);
    }

    #[test]
    fn test_next_sentinel_at_cursor() {
        let mut scanner = Scanner::new(b"\x14rest");
        let (run, found) = scanner.next_sentinel();
        assert!(run.is_empty());
        assert_eq!(found, Some(TOKEN_ANNOTATION));
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_eat_end_padding() {
        let mut scanner = Scanner::new(b"\x00\x00+1");
        assert_eq!(scanner.eat_end_padding(), 2);
        assert_eq!(scanner.peek(), Some(b'+'));

        let mut scanner = Scanner::new(b"+1");
        assert_eq!(scanner.eat_end_padding(), 0);
    }
}
