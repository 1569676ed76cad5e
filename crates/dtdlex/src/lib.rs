//! A single-pass lexer for XML document type definitions (DTDs).
//!
//! `dtdlex` converts raw DTD source text into a flat sequence of typed
//! [`Token`]s, suitable for a grammar parser or binding-code generator to
//! consume. Scanning is byte-oriented and whole-input: one call owns one
//! cursor, runs to completion or first failure, and either yields every
//! token in source order (whitespace skipped) or a single typed
//! [`LexError`] with no partial output.
//!
//! Multi-character keywords (`ELEMENT`, `EMPTY`, `ENTITY`, `ATTLIST`,
//! `#IMPLIED`, `#REQUIRED`, `#FIXED`) are disambiguated from free-form
//! names with one byte of lookahead and matched at fixed length, failing
//! fast on malformed spellings. String literals carry no escape
//! processing.
//!
//! ```
//! use dtdlex::{TokenKind, tokenize};
//!
//! let tokens = tokenize("<!ATTLIST HTML lang NAME #IMPLIED>").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::LeftAngleBracket,
//!         TokenKind::Exclamation,
//!         TokenKind::AttList,
//!         TokenKind::Name,
//!         TokenKind::Name,
//!         TokenKind::Name,
//!         TokenKind::DefaultValueImplied,
//!         TokenKind::RightAngleBracket,
//!     ]
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod lexer;
mod token;


pub use error::{LexError, TokenizeError};
pub use lexer::{Lexer, tokenize};
pub use token::{Token, TokenKind};
