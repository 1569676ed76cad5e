//! The token model: classified, literal-preserving units of DTD source.

use core::fmt;

/// A single lexical token of a document type definition.
///
/// Tokens borrow their text from the input string, so a `Token` never
/// outlives the source it was scanned from. `text` is the exact span
/// matched: the keyword spelling, the scanned name, the punctuation
/// character, or the contents of a string literal with its quotes
/// stripped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The matched literal.
    #[cfg_attr(feature = "serde", serde(borrow))]
    pub text: &'src str,
}

impl<'src> Token<'src> {
    /// Creates a token from a kind and its matched literal.
    #[must_use]
    pub fn new(kind: TokenKind, text: &'src str) -> Token<'src> {
        Token { kind, text }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// An enumeration of every token kind a DTD declaration can contain.
///
/// The set is closed: the lexer never produces a kind outside this list,
/// and downstream parsers may match on it exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `<`, opening a markup declaration.
    LeftAngleBracket,

    /// `>`, closing a markup declaration.
    RightAngleBracket,

    /// `!`, the declaration marker after `<`.
    Exclamation,

    /// `(`, opening a content-model group.
    LeftParen,

    /// `)`, closing a content-model group.
    RightParen,

    /// `,` between members of a sequence group.
    Comma,

    /// `*`, the zero-or-more occurrence marker trailing its operand.
    Asterisk,

    /// `+`, the one-or-more occurrence marker trailing its operand.
    Plus,

    /// `?`, the zero-or-one occurrence marker trailing its operand.
    Question,

    /// `&` between members of an unordered group.
    Ampersand,

    /// `|` between members of a choice group.
    VerticalBar,

    /// `%`, the parameter-entity marker.
    Percent,

    /// `-` in tag-omission position: the tag may not be omitted.
    ///
    /// `-` is overloaded between this and the occurrence-exclusion
    /// operator ([`TokenKind::Minus`]). The two are lexically identical,
    /// so the lexer always emits `TagNeed` and leaves positional
    /// disambiguation to the parser.
    TagNeed,

    /// Standalone capital `O` in tag-omission position: the tag may be
    /// omitted.
    TagUnNeed,

    /// `-` as the occurrence-exclusion operator. Reserved for the parser;
    /// the lexer emits [`TokenKind::TagNeed`] for every `-`.
    Minus,

    /// The `ELEMENT` keyword.
    Element,

    /// The `EMPTY` content-model keyword.
    Empty,

    /// The `ATTLIST` keyword.
    AttList,

    /// The `ENTITY` keyword.
    Entity,

    /// The `#IMPLIED` attribute default.
    DefaultValueImplied,

    /// The `#REQUIRED` attribute default.
    DefaultValueRequired,

    /// The `#FIXED` attribute default.
    DefaultValueFixed,

    /// An unquoted identifier. Any run of bytes up to the next name
    /// terminator is accepted; names are not validated against an
    /// identifier grammar.
    Name,

    /// A quoted literal, delimited by `'` or `"`. The token text carries
    /// the contents without the quotes; quotes cannot be escaped or
    /// nested.
    String,
}
