//! Lexical errors. Any recognizer failure aborts the whole pass; there is
//! no resynchronization and no partial token list.

use thiserror::Error;

/// A terminal lexical error, positioned at the first byte of the construct
/// that failed to scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct LexError {
    pub(crate) source: TokenizeError,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl LexError {
    pub(crate) fn new(source: TokenizeError, line: usize, column: usize) -> LexError {
        LexError {
            source,
            line,
            column,
        }
    }

    /// The recognizer that failed.
    #[must_use]
    pub fn kind(&self) -> TokenizeError {
        self.source
    }

    /// 1-based line of the failed construct's first byte.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based byte column of the failed construct's first byte.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// One variant per recognizer failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    /// An `E`/`L` lookahead committed to `ELEMENT` but the spelling did
    /// not match.
    #[error("malformed ELEMENT keyword")]
    Element,

    /// An `E`/`M` lookahead committed to `EMPTY` but the spelling did not
    /// match.
    #[error("malformed EMPTY keyword")]
    Empty,

    /// An `A` committed to `ATTLIST` but the spelling did not match.
    #[error("malformed ATTLIST keyword")]
    AttList,

    /// An `E`/`N` lookahead committed to `ENTITY` but the spelling did
    /// not match.
    #[error("malformed ENTITY keyword")]
    Entity,

    /// A `#` was not followed by `IMPLIED`, `REQUIRED`, or `FIXED`.
    #[error("malformed default value keyword")]
    DefaultValue,

    /// Input ended before a string literal's closing quote.
    #[error("unterminated string literal")]
    String,

    /// Reserved: a malformed tag-omission marker. No code path produces
    /// this today; `-` and `O` are single-byte tokens that cannot fail.
    #[error("malformed tag omission marker")]
    TagNecessity,
}
