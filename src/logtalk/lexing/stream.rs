//! Per-line cursor
//!
//! `LineStream` is the mutable scanning position within one line of text.
//! It offers exactly the primitives the tokenizer needs: try a pattern at
//! the cursor and advance past it on success, or advance by one character
//! as the guaranteed-progress fallback.
//!
//! Patterns are matched with `Regex::find_at` on the full line and the
//! match is required to start exactly at the cursor. Matching against the
//! full line (rather than a suffix slice) keeps word boundaries at the
//! pattern start honest: the character before the cursor participates in
//! `\b` evaluation.

use regex::Regex;

/// Cursor over one line of text. Lines never contain `\n`.
#[derive(Debug, Clone, Copy)]
pub struct LineStream<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> LineStream<'a> {
    /// Cursor at column 0 of `line`.
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Current byte offset within the line.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The full line under the cursor.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// True once the whole line has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// The character immediately before the cursor, if any.
    pub fn prev_char(&self) -> Option<char> {
        self.line[..self.pos].chars().next_back()
    }

    /// Text consumed since `start`.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.line[start..self.pos]
    }

    /// If `prefix` occurs at the cursor, advance past it.
    pub fn eat_str(&mut self, prefix: &str) -> bool {
        if self.line[self.pos..].starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// If `re` matches at the cursor, advance past the match and return the
    /// matched text.
    ///
    /// Patterns passed here must never match the empty string; the
    /// tokenizer's progress guarantee depends on it.
    pub fn eat_regex(&mut self, re: &Regex) -> Option<&'a str> {
        self.eat_regex_when(re, |_| true)
    }

    /// Like [`eat_regex`](Self::eat_regex), but the match is only taken when
    /// `follow` accepts the first character after it (`None` at end of
    /// line). The follow character itself is never consumed. This stands in
    /// for the lookahead gates of the reference grammar.
    pub fn eat_regex_when(
        &mut self,
        re: &Regex,
        follow: impl FnOnce(Option<char>) -> bool,
    ) -> Option<&'a str> {
        let m = re.find_at(self.line, self.pos)?;
        if m.start() != self.pos {
            return None;
        }
        debug_assert!(m.end() > m.start(), "patterns must consume input");
        let next = self.line[m.end()..].chars().next();
        if !follow(next) {
            return None;
        }
        self.pos = m.end();
        Some(m.as_str())
    }

    /// Like [`eat_regex`](Self::eat_regex), but the final character of the
    /// match is treated as a gate: required for the match, yet left
    /// unconsumed. Used for call-position rules (`name(`), where keeping
    /// the gate inside the pattern lets the engine backtrack across
    /// prefix-overlapping alternatives.
    ///
    /// The gate character must be one ASCII byte.
    pub fn eat_regex_trim_last(&mut self, re: &Regex) -> Option<&'a str> {
        let m = re.find_at(self.line, self.pos)?;
        if m.start() != self.pos {
            return None;
        }
        let end = m.end() - 1;
        debug_assert!(end > m.start(), "gated patterns must consume a name");
        debug_assert!(self.line.as_bytes()[end].is_ascii());
        self.pos = end;
        Some(&self.line[m.start()..end])
    }

    /// Advance past exactly one character. Returns `None` at end of line.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.line[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }
}
