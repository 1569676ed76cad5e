//! Byte cursor over the complete input.
//!
//! Past end of input the cursor reports a `0` sentinel byte instead of a
//! distinct end-of-stream type; recognizers built on fixed-length literal
//! comparison fail naturally when the sentinel leaks into a candidate.

/// Read-position state for one lexing pass.
///
/// Invariants, holding after every [`Cursor::advance`]:
/// - `read_position == position + 1`
/// - `current == input[position]`, or `0` iff `position >= input.len()`
pub(crate) struct Cursor<'src> {
    input: &'src str,
    /// Index of the byte currently under inspection.
    position: usize,
    /// Index of the next byte to consume.
    read_position: usize,
    /// Cached byte at `position`; `0` past end of input.
    current: u8,
    line: usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(input: &'src str) -> Cursor<'src> {
        Cursor {
            input,
            position: 0,
            read_position: 0,
            current: 0,
            line: 1,
            column: 0,
        }
    }

    /// Moves the cursor to the next byte. Never fails; past the end it
    /// parks `current` on the sentinel and keeps counting.
    pub(crate) fn advance(&mut self) {
        if self.current == b'\n' {
            self.line += 1;
            self.column = 0;
        }
        self.current = if self.read_position >= self.input.len() {
            0
        } else {
            self.input.as_bytes()[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
        self.column += 1;
    }

    /// The byte at `read_position`, without moving, or `0` past end.
    pub(crate) fn peek(&self) -> u8 {
        if self.read_position >= self.input.len() {
            0
        } else {
            self.input.as_bytes()[self.read_position]
        }
    }

    pub(crate) fn current(&self) -> u8 {
        self.current
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn read_position(&self) -> usize {
        self.read_position
    }

    /// True once the dispatch loop has run one iteration past exhaustion,
    /// matching the final sentinel.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.read_position > self.input.len()
    }

    /// True when `current` is the sentinel rather than an input byte.
    pub(crate) fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// 1-based line and byte column of the current byte.
    pub(crate) fn location(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// The input span `start..end`, or `None` if the range is out of
    /// bounds or off a character boundary.
    pub(crate) fn slice(&self, start: usize, end: usize) -> Option<&'src str> {
        self.input.get(start..end)
    }
}
