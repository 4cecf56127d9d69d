//! Fixed-capacity command line storage.

use crate::config::LINE_CAPACITY;

/// Longest line that fits; the last slot stays reserved.
const MAX_LEN: usize = LINE_CAPACITY - 1;

/// An owned line of at most `LINE_CAPACITY - 1` bytes.
#[derive(Clone, Copy)]
pub struct Line {
    bytes: [u8; LINE_CAPACITY],
    len: usize,
}

impl Line {
    /// The empty line.
    pub const EMPTY: Line = Line {
        bytes: [0; LINE_CAPACITY],
        len: 0,
    };

    /// Copies `s`, truncated to capacity on a character boundary.
    pub fn new(s: &str) -> Self {
        let mut end = s.len().min(MAX_LEN);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        let mut line = Self::EMPTY;
        line.bytes[..end].copy_from_slice(&s.as_bytes()[..end]);
        line.len = end;
        line
    }

    /// Content bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Content as text.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Number of content bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the line has no content.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Line {}

impl core::fmt::Debug for Line {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self.as_str(), f)
    }
}

/// Cursor movements within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One position left.
    Left,
    /// One position right.
    Right,
    /// Start of the line.
    Home,
    /// End of the line.
    End,
}

/// An in-progress command line with an insertion cursor.
///
/// Invariant: `0 <= cursor <= len <= LINE_CAPACITY - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineBuffer {
    line: Line,
    cursor: usize,
}

impl LineBuffer {
    /// An empty buffer.
    pub const fn new() -> Self {
        Self {
            line: Line::EMPTY,
            cursor: 0,
        }
    }

    /// Inserts `byte` at the cursor and advances it. Returns false when full.
    pub fn insert(&mut self, byte: u8) -> bool {
        let len = self.line.len;
        if len == MAX_LEN {
            return false;
        }
        self.line.bytes.copy_within(self.cursor..len, self.cursor + 1);
        self.line.bytes[self.cursor] = byte;
        self.cursor += 1;
        self.line.len += 1;
        true
    }

    /// Deletes the byte before the cursor. Returns false at the line start.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let len = self.line.len;
        self.line.bytes.copy_within(self.cursor..len, self.cursor - 1);
        self.line.len -= 1;
        self.cursor -= 1;
        self.line.bytes[self.line.len] = 0;
        true
    }

    /// Moves the cursor, clamped to `[0, len]`.
    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.cursor = match movement {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(self.line.len),
            CursorMove::Home => 0,
            CursorMove::End => self.line.len,
        };
    }

    /// Replaces the whole content and puts the cursor at its end.
    pub fn replace_all(&mut self, content: &str) {
        self.line = Line::new(content);
        self.cursor = self.line.len;
    }

    /// Takes the finished line, leaving the buffer empty.
    pub fn commit(&mut self) -> Line {
        let line = self.line;
        *self = Self::new();
        line
    }

    /// Content bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// Content as text.
    pub fn as_str(&self) -> &str {
        self.line.as_str()
    }

    /// Number of content bytes.
    pub fn len(&self) -> usize {
        self.line.len
    }

    /// Whether the buffer has no content.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Cursor position in `[0, len]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
