//! Single-pass scanner from DTD source text to a flat token sequence.
//!
//! The dispatch loop advances one byte at a time and hands off to a
//! sub-recognizer when the current byte opens a multi-byte construct:
//!
//! - `E` commits to `ELEMENT`, `EMPTY`, or `ENTITY` on one byte of
//!   lookahead (`L`, `M`, `N`); any other peek falls through to the name
//!   recognizer. Once a keyword recognizer is entered it only consumes
//!   forward, never rewinds.
//! - `A` always commits to `ATTLIST`.
//! - `#` commits to `#IMPLIED`, `#REQUIRED`, or `#FIXED` on the byte
//!   after the hash.
//! - `'` and `"` open a string literal closed only by the same quote;
//!   there is no escape processing.
//! - Anything that is not punctuation or whitespace becomes a name,
//!   running up to (and not consuming) the next terminator byte.
//!
//! Keyword recognizers are fixed-length matches, not prefix scans: they
//! read exactly as many further bytes as the keyword has and compare the
//! assembled candidate against the expected literal. A mismatch — which
//! includes running into the end-of-input sentinel early — aborts the
//! whole pass with the recognizer's [`TokenizeError`]; no partial token
//! list is returned.
//!
//! Scanning is synchronous and whole-input: one call, one owned cursor,
//! O(n) in the input length.

use alloc::vec::Vec;

use crate::error::{LexError, TokenizeError};
use crate::token::{Token, TokenKind};

mod cursor;


use cursor::Cursor;

/// Scans a complete DTD source text into tokens.
///
/// Source order is preserved and whitespace is skipped. On the first
/// recognizer failure the partial token list is discarded and only the
/// typed error is returned.
///
/// ```
/// use dtdlex::{TokenKind, tokenize};
///
/// let tokens = tokenize("<!ELEMENT person - O (name)>").unwrap();
/// assert_eq!(tokens[2].kind, TokenKind::Element);
/// assert_eq!(tokens[3].text, "person");
/// ```
///
/// # Errors
///
/// Returns a [`LexError`] identifying the construct that failed to scan
/// and the position of its first byte.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(input).execute()
}

/// A one-shot lexer over a complete input string.
///
/// A `Lexer` is constructed per pass and consumed by [`Lexer::execute`];
/// it is never reused. Independent inputs can be lexed concurrently
/// without coordination since each pass owns its cursor exclusively.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `input`.
    #[must_use]
    pub fn new(input: &'src str) -> Lexer<'src> {
        Lexer {
            cursor: Cursor::new(input),
        }
    }

    /// Runs the scan to completion or first failure.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] on the first recognizer failure; no tokens
    /// are returned alongside it.
    pub fn execute(mut self) -> Result<Vec<Token<'src>>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.cursor.advance();
            if self.cursor.is_exhausted() {
                break;
            }
            let (line, column) = self.cursor.location();
            let scanned = match self.cursor.current() {
                b'<' => Ok(self.punctuation(TokenKind::LeftAngleBracket)),
                b'>' => Ok(self.punctuation(TokenKind::RightAngleBracket)),
                b'!' => Ok(self.punctuation(TokenKind::Exclamation)),
                b'(' => Ok(self.punctuation(TokenKind::LeftParen)),
                b')' => Ok(self.punctuation(TokenKind::RightParen)),
                b',' => Ok(self.punctuation(TokenKind::Comma)),
                b'*' => Ok(self.punctuation(TokenKind::Asterisk)),
                b'+' => Ok(self.punctuation(TokenKind::Plus)),
                b'?' => Ok(self.punctuation(TokenKind::Question)),
                b'&' => Ok(self.punctuation(TokenKind::Ampersand)),
                b'|' => Ok(self.punctuation(TokenKind::VerticalBar)),
                b'%' => Ok(self.punctuation(TokenKind::Percent)),
                // `-` doubles as the occurrence-exclusion operator; the
                // parser disambiguates by position.
                b'-' => Ok(self.punctuation(TokenKind::TagNeed)),
                b'O' => Ok(self.punctuation(TokenKind::TagUnNeed)),
                b' ' | b'\t' | b'\r' | b'\n' => continue,
                b'E' => match self.cursor.peek() {
                    b'L' => self.keyword("ELEMENT", TokenKind::Element, TokenizeError::Element),
                    b'M' => self.keyword("EMPTY", TokenKind::Empty, TokenizeError::Empty),
                    b'N' => self.keyword("ENTITY", TokenKind::Entity, TokenizeError::Entity),
                    _ => Ok(self.name()),
                },
                b'A' => self.keyword("ATTLIST", TokenKind::AttList, TokenizeError::AttList),
                b'#' => self.default_value(),
                b'\'' | b'"' => self.string(),
                _ => Ok(self.name()),
            };
            match scanned {
                Ok(token) => tokens.push(token),
                Err(source) => return Err(LexError::new(source, line, column)),
            }
        }
        Ok(tokens)
    }

    /// Emits the current byte as a single-character token.
    fn punctuation(&mut self, kind: TokenKind) -> Token<'src> {
        let start = self.cursor.position();
        let text = self.cursor.slice(start, start + 1).unwrap_or_default();
        Token::new(kind, text)
    }

    /// Fixed-length keyword match. The first byte is already under the
    /// cursor; reads exactly `literal.len() - 1` further bytes and
    /// compares the whole candidate. Short input fails the comparison.
    fn keyword(
        &mut self,
        literal: &'static str,
        kind: TokenKind,
        error: TokenizeError,
    ) -> Result<Token<'src>, TokenizeError> {
        let start = self.cursor.position();
        for _ in 1..literal.len() {
            self.cursor.advance();
        }
        match self.cursor.slice(start, start + literal.len()) {
            Some(text) if text == literal => Ok(Token::new(kind, text)),
            _ => Err(error),
        }
    }

    /// Recognizes `#IMPLIED`, `#REQUIRED`, or `#FIXED`, committing on the
    /// byte after the `#`. The token text keeps the leading hash.
    fn default_value(&mut self) -> Result<Token<'src>, TokenizeError> {
        let start = self.cursor.position();
        let (literal, kind) = match self.cursor.peek() {
            b'I' => ("IMPLIED", TokenKind::DefaultValueImplied),
            b'R' => ("REQUIRED", TokenKind::DefaultValueRequired),
            b'F' => ("FIXED", TokenKind::DefaultValueFixed),
            _ => return Err(TokenizeError::DefaultValue),
        };
        for _ in 0..literal.len() {
            self.cursor.advance();
        }
        match self.cursor.slice(start, start + 1 + literal.len()) {
            Some(text) if &text[1..] == literal => Ok(Token::new(kind, text)),
            _ => Err(TokenizeError::DefaultValue),
        }
    }

    /// Accumulates a name until the next byte is a terminator, leaving
    /// the terminator unconsumed for the dispatch loop. Never fails; any
    /// non-terminator byte run is a name, single bytes included.
    fn name(&mut self) -> Token<'src> {
        let start = self.cursor.position();
        loop {
            match self.cursor.peek() {
                0 | b' ' | b'\t' | b'\r' | b'\n' | b',' | b')' | b'*' | b'&' | b'|' | b'+'
                | b'?' => break,
                _ => self.cursor.advance(),
            }
        }
        // The byte after the name is ASCII (or the end of input), so this
        // range always sits on character boundaries.
        let text = self
            .cursor
            .slice(start, self.cursor.position() + 1)
            .unwrap_or_default();
        Token::new(TokenKind::Name, text)
    }

    /// Accumulates a string literal up to the quote byte that opened it,
    /// consuming the closing quote. The token text excludes the quotes.
    fn string(&mut self) -> Result<Token<'src>, TokenizeError> {
        let quote = self.cursor.current();
        let start = self.cursor.read_position();
        loop {
            self.cursor.advance();
            if self.cursor.at_end() {
                return Err(TokenizeError::String);
            }
            if self.cursor.current() == quote {
                let text = self
                    .cursor
                    .slice(start, self.cursor.position())
                    .unwrap_or_default();
                return Ok(Token::new(TokenKind::String, text));
            }
        }
    }
}
