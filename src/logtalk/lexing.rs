//! Streaming lexer for Logtalk source text
//!
//! The lexer consumes one line at a time, left to right. Each call to
//! [`tokenizer::next_token`] consumes at least one character and reports the
//! category for the consumed span, or `None` when the span gets no special
//! styling (plain atoms, whitespace, stray punctuation).
//!
//! State that must survive line boundaries (an open block comment, an open
//! quoted literal) lives in [`state::LexerState`], passed explicitly between
//! calls. Everything else is re-derived from the line text.

pub mod category;
pub mod patterns;
pub mod state;
pub mod stream;
pub mod tokenizer;

pub use category::Category;
pub use state::{LexerState, LiteralKind, OpenLiteral, QuoteDelimiter};
pub use stream::LineStream;
pub use tokenizer::{coalesce, next_token, tokenize, tokenize_line, LineSpans, StyledSpan};
