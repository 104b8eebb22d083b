//! Indentation advisor
//!
//! Suggests an indentation width for one line by looking at that line and
//! the nearest non-blank line above it (the anchor). This is a heuristic,
//! single-line-lookback indenter: it does not track bracket depth or
//! comment state across the document, keeping each suggestion cheap enough
//! to run on explicit indent requests. The backward scan is bounded by the
//! distance to the anchor, never the whole document.

use once_cell::sync::Lazy;
use regex::Regex;

/// Indentation step, in columns.
pub const INDENT_UNIT: usize = 4;

/// Current line closes an entity: `:- end_object.` and friends.
static CLOSING_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*:-\send_(?:object|protocol|category)\.").expect("pattern"));

/// Current line starts with a clause-terminating period.
static PERIOD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\.(?:\s|$)").expect("pattern"));

/// Anchor opens an entity: `:- object(...)`, protocol, category, module.
static ENTITY_OPENING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":-\s(?:object|protocol|category|module)\(").expect("pattern"));

/// Anchor ends with an unclosed opening bracket.
static OPEN_BRACKET_EOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[(\[{]\s*$").expect("pattern"));

/// Current line begins with a closing bracket.
static CLOSE_BRACKET_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[)\]}]").expect("pattern"));

/// Suggest the indentation width in columns for `lines[line_index]`.
///
/// `lines[line_index]` may be empty or partial (the line being typed).
/// Lines after `line_index` are never consulted.
pub fn suggest_indent(line_index: usize, lines: &[&str]) -> usize {
    if line_index == 0 {
        return 0;
    }
    let current = lines.get(line_index).copied().unwrap_or("");

    // Nearest non-blank line above is the anchor.
    let anchor = (0..line_index.min(lines.len()))
        .rev()
        .map(|i| lines[i])
        .find(|line| !line.trim().is_empty());
    let Some(anchor) = anchor else {
        return 0;
    };

    let anchor_indent = leading_whitespace_width(anchor);
    let anchor_trimmed = anchor.trim();

    // Closing constructs on the current line de-indent relative to the
    // anchor.
    if CLOSING_DIRECTIVE.is_match(current) || PERIOD_START.is_match(current) {
        return anchor_indent.saturating_sub(INDENT_UNIT);
    }

    // An entity body indents in.
    if ENTITY_OPENING.is_match(anchor_trimmed) {
        return anchor_indent + INDENT_UNIT;
    }

    // Clause neck: the rule body continues indented.
    if anchor_trimmed.contains(":-") {
        return anchor_indent + INDENT_UNIT;
    }

    // Unclosed opening bracket at end of anchor.
    if OPEN_BRACKET_EOL.is_match(anchor_trimmed) {
        return anchor_indent + INDENT_UNIT;
    }

    // Closing bracket at start of current line.
    if CLOSE_BRACKET_START.is_match(current) {
        return anchor_indent.saturating_sub(INDENT_UNIT);
    }

    anchor_indent
}

/// Convenience wrapper over a whole buffer: splits on `\n` and delegates.
pub fn suggest_indent_in(source: &str, line_index: usize) -> usize {
    let lines: Vec<&str> = source.lines().collect();
    suggest_indent(line_index, &lines)
}

/// Width of a line's leading whitespace, counted in characters (a tab
/// counts as one column, matching the editor contract).
pub fn leading_whitespace_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_gets_zero() {
        assert_eq!(suggest_indent(0, &[":- object(foo)."]), 0);
    }

    #[test]
    fn test_no_anchor_gets_zero() {
        assert_eq!(suggest_indent(2, &["", "   ", "X"]), 0);
    }

    #[test]
    fn test_entity_opening_indents_body() {
        let lines = [":- object(foo).", ""];
        assert_eq!(suggest_indent(1, &lines), INDENT_UNIT);
    }

    #[test]
    fn test_closing_directive_deindents() {
        let lines = ["    bar.", ":- end_object."];
        assert_eq!(suggest_indent(1, &lines), 0);
    }

    #[test]
    fn test_closing_directive_never_goes_negative() {
        let lines = ["bar.", ":- end_object."];
        assert_eq!(suggest_indent(1, &lines), 0);
    }

    #[test]
    fn test_period_start_deindents() {
        let lines = ["        foo", "    ."];
        assert_eq!(suggest_indent(1, &lines), 4);
    }

    #[test]
    fn test_clause_neck_indents() {
        let lines = ["    len([], 0) :-", ""];
        assert_eq!(suggest_indent(1, &lines), 4 + INDENT_UNIT);
    }

    #[test]
    fn test_open_bracket_at_eol_indents() {
        let lines = ["    foo(", ""];
        assert_eq!(suggest_indent(1, &lines), 4 + INDENT_UNIT);
    }

    #[test]
    fn test_close_bracket_at_start_deindents() {
        let lines = ["        bar", "    )"];
        assert_eq!(suggest_indent(1, &lines), 4);
    }

    #[test]
    fn test_default_maintains_anchor_indent() {
        let lines = ["    foo,", "bar"];
        assert_eq!(suggest_indent(1, &lines), 4);
    }

    #[test]
    fn test_anchor_skips_blank_lines() {
        let lines = [":- object(foo).", "", "   ", ""];
        assert_eq!(suggest_indent(3, &lines), INDENT_UNIT);
    }

    #[test]
    fn test_suggest_indent_in_buffer() {
        let source = ":- object(counter).\n";
        assert_eq!(suggest_indent_in(source, 1), INDENT_UNIT);
    }

    #[test]
    fn test_leading_whitespace_width_counts_chars() {
        assert_eq!(leading_whitespace_width("    x"), 4);
        assert_eq!(leading_whitespace_width("\t\tx"), 2);
        assert_eq!(leading_whitespace_width("x"), 0);
        assert_eq!(leading_whitespace_width(""), 0);
    }
}
