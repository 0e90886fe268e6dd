//! Scanner cursor over an ASCII byte buffer.
//!
//! The cursor owns the read position, the byte under it, and the line
//! counter. All movement goes through [`ScannerState::advance`], so the
//! current byte is always `source[position]`, or `None` once the
//! position reaches the end of the buffer.

/// Mutable scanning state for a single tokenization call.
#[derive(Debug, Clone)]
pub struct ScannerState<'a> {
    text: &'a str,
    source: &'a [u8],
    position: usize,
    current: Option<u8>,
    line: usize,
}

impl<'a> ScannerState<'a> {
    /// Start scanning at the beginning of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0, 1)
    }

    /// Start scanning at an arbitrary byte offset and line.
    ///
    /// Offsets past the end are clamped and yield the end-of-input sentinel.
    #[must_use]
    pub fn at(text: &'a str, position: usize, line: usize) -> Self {
        let source = text.as_bytes();
        let position = position.min(source.len());
        Self {
            text,
            source,
            position,
            current: source.get(position).copied(),
            line,
        }
    }

    /// Byte under the cursor, `None` at end of input.
    #[must_use]
    pub const fn current(&self) -> Option<u8> {
        self.current
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Byte after the current one, without moving.
    #[must_use]
    pub fn peek_next(&self) -> Option<u8> {
        self.source.get(self.position + 1).copied()
    }

    /// Full character under the cursor, `None` at end of input.
    ///
    /// A position inside a multi-byte sequence yields `U+FFFD`.
    #[must_use]
    pub fn current_char(&self) -> Option<char> {
        self.current?;
        Some(self.decode().unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn decode(&self) -> Option<char> {
        self.text.get(self.position..)?.chars().next()
    }

    /// Move past the whole character under the cursor.
    pub fn advance_char(&mut self) {
        let width = self.decode().map_or(1, char::len_utf8);
        for _ in 0..width {
            self.advance();
        }
    }

    /// Move forward by one byte. Does nothing at end of input.
    pub fn advance(&mut self) {
        if self.position < self.source.len() {
            self.position += 1;
            self.current = self.source.get(self.position).copied();
        }
    }

    /// Advance if the current byte is `byte`.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.current == Some(byte) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a `'\n'` and bump the line counter.
    pub fn newline(&mut self) {
        if self.eat(b'\n') {
            self.line += 1;
        }
    }

    /// Skip spaces and tabs. Newlines are left for the caller.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(b' ' | b'\t')) {
            self.advance();
        }
    }

    /// Skip to the next `'\n'` (left unconsumed) or end of input.
    pub fn skip_to_line_end(&mut self) {
        while self.current.is_some_and(|b| b != b'\n') {
            self.advance();
        }
    }

    /// Advance while `pred` holds for the current byte.
    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current.is_some_and(&pred) {
            self.advance();
        }
    }

    /// Text from `start` up to the cursor.
    #[must_use]
    pub fn slice(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.source[start..self.position]).into_owned()
    }
}
