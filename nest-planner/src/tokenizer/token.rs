use logos::Logos;
use std::ops::Range;

/// The character that starts an alias of a nested level.
pub const ALIAS_MARKER: char = '@';

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token(">")]
    Greater,

    #[token("<")]
    Less,

    #[token("=")]
    Eq,

    #[token("&")]
    And,

    #[token("|")]
    Or,

    /// An alias standing in for a nested level, such as `@0`.
    #[regex(r"@[0-9]+")]
    Alias,

    /// The alias marker with no index after it.
    #[token("@")]
    Marker,

    /// Any run of characters with no structural meaning: names, numbers, whitespace.
    #[regex(r"[^()+\-<>=&|@]+")]
    Text,
}

impl TokenKind {
    /// Returns true if the token is the alias marker, with or without an index.
    pub fn is_marker(self) -> bool {
        matches!(self, Self::Alias | Self::Marker)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns the index encoded in an [`TokenKind::Alias`] token.
    ///
    /// Returns [`None`] for any other kind of token, or if the index does not fit in a `usize`.
    pub fn alias_index(&self) -> Option<usize> {
        match self.kind {
            TokenKind::Alias => self.lexeme[1..].parse().ok(),
            _ => None,
        }
    }
}
