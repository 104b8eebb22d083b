//! The scanner's priority chain
//!
//! `next_token` consumes the next lexical unit at the stream cursor and
//! reports its category. The rule order is a deliberate priority chain:
//! open comment/literal state first, then comment and literal openers,
//! then the keyword/operator/builtin table, numbers, variables, plain
//! atoms, whitespace, and finally a single-character fallback. Every call
//! consumes at least one character, so tokenizing a line of `n` characters
//! terminates in at most `n` calls, whatever the input.
//!
//! There is no error channel. Malformed escapes, unterminated comments and
//! literals, and stray punctuation all degrade to either carried-over
//! state or an unstyled span.

use std::ops::Range;

use crate::logtalk::lexing::category::Category;
use crate::logtalk::lexing::patterns;
use crate::logtalk::lexing::state::{LexerState, LiteralKind, QuoteDelimiter};
use crate::logtalk::lexing::stream::LineStream;

/// Consume the next lexical unit and return its category, or `None` for
/// spans with no special styling. Mutates `state` in place; the caller is
/// expected to call repeatedly until `stream.is_at_end()`.
pub fn next_token(stream: &mut LineStream<'_>, state: &mut LexerState) -> Option<Category> {
    debug_assert!(!stream.is_at_end());

    // Inside a block comment: everything is comment until `*/`.
    if state.in_block_comment {
        if stream.eat_str("*/") {
            state.in_block_comment = false;
            return Some(Category::Comment);
        }
        stream.bump();
        return Some(Category::Comment);
    }

    // Inside a quoted literal: closer, then escapes, then literal text.
    if let Some(open) = state.literal {
        if stream.eat_str(open.delimiter.as_str()) {
            state.close_literal();
            return Some(open.kind.category());
        }
        for escape in patterns::escape_patterns() {
            if stream.eat_regex(escape).is_some() {
                return Some(Category::Escape);
            }
        }
        stream.bump();
        return Some(open.kind.category());
    }

    // Comment and literal openers.
    if stream.eat_str("/*") {
        state.in_block_comment = true;
        return Some(Category::Comment);
    }
    if stream.eat_regex(&patterns::LINE_COMMENT).is_some() {
        return Some(Category::Comment);
    }
    if stream.eat_str("'") {
        state.open_literal(QuoteDelimiter::SingleQuote, LiteralKind::QuotedAtom);
        return Some(Category::Atom);
    }
    if stream.eat_str("\"") {
        state.open_literal(QuoteDelimiter::DoubleQuote, LiteralKind::QuotedString);
        return Some(Category::String);
    }

    // Directives, operators, builtins: first matching rule wins.
    for rule in patterns::scan_rules() {
        if rule.try_eat(stream).is_some() {
            return Some(rule.category);
        }
    }

    // Numbers: radix-prefixed, character-code, then decimal/float.
    if stream.eat_regex(&patterns::RADIX_NUMBER).is_some() {
        return Some(Category::Number);
    }
    if at_char_code_position(stream) && stream.eat_regex(&patterns::CHAR_CODE).is_some() {
        return Some(Category::Number);
    }
    if stream.eat_regex(&patterns::DECIMAL_NUMBER).is_some() {
        return Some(Category::Number);
    }

    // Variables.
    if stream.eat_regex(&patterns::VARIABLE).is_some() {
        return Some(Category::Variable);
    }

    // Plain atoms and whitespace carry no styling.
    if stream.eat_regex(&patterns::PLAIN_ATOM).is_some() {
        return None;
    }
    if stream.eat_regex(&patterns::WHITESPACE).is_some() {
        return None;
    }

    // Forward progress on anything unrecognized.
    stream.bump();
    None
}

/// Character-code literals (`0'c`) are only recognized at line start or
/// after whitespace.
fn at_char_code_position(stream: &LineStream<'_>) -> bool {
    stream.prev_char().map_or(true, |c| c.is_whitespace())
}

/// One consumed span of a line: its byte range and category.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StyledSpan {
    pub range: Range<usize>,
    pub category: Option<Category>,
}

/// The spans of one line, in order, covering the whole line.
pub type LineSpans = Vec<StyledSpan>;

/// Tokenize a single line, carrying `state` across the call. Returned
/// spans are contiguous and cover the line exactly.
pub fn tokenize_line(line: &str, state: &mut LexerState) -> LineSpans {
    let mut stream = LineStream::new(line);
    let mut spans = Vec::new();
    while !stream.is_at_end() {
        let start = stream.pos();
        let category = next_token(&mut stream, state);
        debug_assert!(stream.pos() > start, "scanner must make progress");
        spans.push(StyledSpan {
            range: start..stream.pos(),
            category,
        });
    }
    spans
}

/// Tokenize a whole buffer from a fresh session state, line by line.
/// Every prefix of the result is independently valid; a caller may stop
/// consuming at any line.
pub fn tokenize(source: &str) -> Vec<LineSpans> {
    let mut state = LexerState::default();
    source
        .lines()
        .map(|line| tokenize_line(line, &mut state))
        .collect()
}

/// Merge adjacent spans with the same category. The scanner emits one span
/// per call (single characters inside comments and literals); rendering
/// and tests usually want the merged view.
pub fn coalesce(spans: &[StyledSpan]) -> LineSpans {
    let mut merged: LineSpans = Vec::new();
    for span in spans {
        match merged.last_mut() {
            Some(prev) if prev.category == span.category && prev.range.end == span.range.start => {
                prev.range.end = span.range.end;
            }
            _ => merged.push(span.clone()),
        }
    }
    merged
}
