//! Persistent lexer state
//!
//! Only two things survive a line boundary: an unterminated block comment
//! and an unterminated quoted literal. Both are plain values owned by one
//! tokenization session; a full re-highlight starts from
//! `LexerState::default()`, never from leftover state.

use crate::logtalk::lexing::category::Category;

/// Which delimiter opened the current literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteDelimiter {
    SingleQuote,
    DoubleQuote,
}

impl QuoteDelimiter {
    /// The delimiter character itself.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteDelimiter::SingleQuote => "'",
            QuoteDelimiter::DoubleQuote => "\"",
        }
    }
}

/// Semantic kind of the open literal, independent of its delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    QuotedAtom,
    QuotedString,
}

impl LiteralKind {
    /// Category emitted for ordinary characters of the literal and for its
    /// delimiters.
    pub fn category(&self) -> Category {
        match self {
            LiteralKind::QuotedAtom => Category::Atom,
            LiteralKind::QuotedString => Category::String,
        }
    }
}

/// An open quoted literal. Holding the delimiter and kind together makes
/// "literal open but delimiter unknown" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenLiteral {
    pub delimiter: QuoteDelimiter,
    pub kind: LiteralKind,
}

/// Lexer state carried across line boundaries within one document.
///
/// `in_block_comment` and `literal` are mutually exclusive: the tokenizer
/// checks comment state first and never opens a literal inside a comment or
/// a comment inside a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerState {
    /// Inside an unterminated `/* ... */` span.
    pub in_block_comment: bool,

    /// The currently open quoted literal, if any.
    pub literal: Option<OpenLiteral>,
}

impl LexerState {
    /// Session-start state: not inside anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a quoted literal.
    pub fn open_literal(&mut self, delimiter: QuoteDelimiter, kind: LiteralKind) {
        debug_assert!(!self.in_block_comment);
        self.literal = Some(OpenLiteral { delimiter, kind });
    }

    /// Close the open literal, returning its kind.
    pub fn close_literal(&mut self) -> Option<LiteralKind> {
        self.literal.take().map(|open| open.kind)
    }
}
