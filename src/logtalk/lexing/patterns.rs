//! Compiled pattern tables for the Logtalk scanner
//!
//! The scan table transcribes the reference grammar's rule list in its
//! exact textual order. Order is load-bearing: several patterns overlap
//! (`mod` is both a standalone evaluable word and a builtin in call
//! position) and the first structurally applicable rule wins.
//!
//! The reference grammar gates many names on a lookahead (`name(?=\()`,
//! `(?=\.)`, `(?![_!(^~])`). `regex` has no lookahead, so:
//!
//! - call/dot gates are part of the pattern and the gate character is left
//!   unconsumed after a match ([`Gate::Peeked`]). Keeping the gate inside
//!   the pattern lets the engine backtrack across prefix-overlapping
//!   alternations such as `if` vs `include`;
//! - negative gates stay outside the pattern ([`Gate::NotFollowedBy`]),
//!   which is safe because those patterns end in `\b` and therefore match
//!   a maximal word.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::logtalk::lexing::category::Category;
use crate::logtalk::lexing::stream::LineStream;

/// Characters that must not follow a standalone keyword
/// (the reference grammar's `(?![_!(^~])`).
pub const NOT_CALL_FOLLOW: &[char] = &['_', '!', '(', '^', '~'];

/// How a rule constrains the character after its match.
#[derive(Debug, Clone, Copy)]
pub enum Gate {
    /// The pattern's last character is a one-byte gate (`(` or `.`) that is
    /// required but not consumed.
    Peeked,

    /// The match must not be immediately followed by any of these
    /// characters.
    NotFollowedBy(&'static [char]),

    /// No condition beyond the pattern itself.
    None,
}

/// One entry of the ordered scan table.
pub struct ScanRule {
    pattern: Regex,
    gate: Gate,
    pub category: Category,
}

impl ScanRule {
    fn new(pattern: &str, gate: Gate, category: Category) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("scan pattern must compile"),
            gate,
            category,
        }
    }

    /// Try this rule at the stream cursor, consuming the matched name on
    /// success.
    pub fn try_eat<'a>(&self, stream: &mut LineStream<'a>) -> Option<&'a str> {
        match self.gate {
            Gate::Peeked => stream.eat_regex_trim_last(&self.pattern),
            Gate::NotFollowedBy(set) => stream
                .eat_regex_when(&self.pattern, |next| {
                    next.map_or(true, |c| !set.contains(&c))
                }),
            Gate::None => stream.eat_regex(&self.pattern),
        }
    }
}

/// The ordered keyword/operator/builtin table (step 4 of the scanner's
/// priority chain). Transcribed from the reference grammar top to bottom;
/// do not reorder or deduplicate (some later entries are shadowed by
/// earlier ones on purpose).
pub fn scan_rules() -> &'static [ScanRule] {
    static RULES: Lazy<Vec<ScanRule>> = Lazy::new(|| {
        use Category::{Builtin, Meta, Operator};
        let call = Gate::Peeked;
        let dot = Gate::Peeked;
        let bare = Gate::NotFollowedBy(NOT_CALL_FOLLOW);

        vec![
            // Entity opening and closing directives
            ScanRule::new(r":-\s(?:object|protocol|category|module)\(", call, Meta),
            ScanRule::new(r":-\send_(?:object|protocol|category)\.", dot, Meta),
            // Entity relations
            ScanRule::new(
                r"\b(?:complements|extends|instantiates|imports|implements|specializes)\(",
                call,
                Meta,
            ),
            // Other directives
            ScanRule::new(
                r":-\s(?:else|endif|built_in|dynamic|synchronized|threaded)\.",
                dot,
                Meta,
            ),
            ScanRule::new(
                r":-\s(?:calls|coinductive|elif|encoding|ensure_loaded|export|if|include|initialization|info|reexport|set_(?:logtalk|prolog)_flag|uses)\(",
                call,
                Meta,
            ),
            ScanRule::new(
                r":-\s(?:alias|info|dynamic|discontiguous|meta_(?:non_terminal|predicate)|mode|multifile|public|protected|private|op|uses|use_module|synchronized)\(",
                call,
                Meta,
            ),
            // Message sending and module qualification
            ScanRule::new(r"::", Gate::None, Operator),
            ScanRule::new(r":", Gate::None, Operator),
            // External call
            ScanRule::new(r"[{}]", Gate::None, Operator),
            // Mode operators
            ScanRule::new(r"[?@]", Gate::None, Operator),
            // Comparison operators
            ScanRule::new(r"@(?:=<|<|>|>=)|==|\\==", Gate::None, Operator),
            ScanRule::new(r"=<|[<>]=?|=:=|=\\=", Gate::None, Operator),
            // Bitwise operators
            ScanRule::new(r"<<|>>|/\\|\\/|\\", Gate::None, Operator),
            // Arithmetic operators
            ScanRule::new(r"\*\*|[+\-*/]|//", Gate::None, Operator),
            // Standalone evaluable-function words
            ScanRule::new(r"\b(?:e|pi|div|mod|rem)\b", bare, Operator),
            // Misc operators
            ScanRule::new(
                r":-|!|\\\+|[,;]|-->|->|=|\\=|\.|\.\.|\^|\bas\b|\bis\b",
                Gate::None,
                Operator,
            ),
            // Built-in predicates: evaluable functions
            ScanRule::new(
                r"\b(?:abs|acos|asin|atan|atan2|ceiling|cos|div|exp|float(?:_(?:integer|fractional)_part)?|floor|log|max|min|mod|rem|round|sign|sin|sqrt|tan|truncate|xor)\(",
                call,
                Builtin,
            ),
            // Control predicates and standalone error words
            ScanRule::new(
                r"\b(?:true|fail|false|repeat|(?:instantiation|system)_error)\b",
                bare,
                Builtin,
            ),
            ScanRule::new(
                r"\b(?:uninstantiation|type|domain|consistency|existence|permission|representation|evaluation|resource|syntax)_error\(",
                call,
                Builtin,
            ),
            ScanRule::new(r"\b(?:call|catch|ignore|throw|once)\(", call, Builtin),
            // Event handlers
            ScanRule::new(r"\b(?:after|before)\(", call, Builtin),
            // Message forwarding handler
            ScanRule::new(r"\bforward\(", call, Builtin),
            // Execution-context methods
            ScanRule::new(r"\b(?:context|parameter|this|se(?:lf|nder))\(", call, Builtin),
            // Reflection
            ScanRule::new(r"\b(?:current_predicate|predicate_property)\(", call, Builtin),
            // DCGs and term expansion
            ScanRule::new(
                r"\b(?:expand_(?:goal|term)|(?:goal|term)_expansion|phrase)\(",
                call,
                Builtin,
            ),
            // Entity creation and destruction
            ScanRule::new(
                r"\b(?:abolish|c(?:reate|urrent))_(?:object|protocol|category)\(",
                call,
                Builtin,
            ),
            // Entity properties
            ScanRule::new(r"\b(?:object|protocol|category)_property\(", call, Builtin),
            // Entity relation predicates
            ScanRule::new(r"\bco(?:mplements_object|nforms_to_protocol)\(", call, Builtin),
            ScanRule::new(r"\bextends_(?:object|protocol|category)\(", call, Builtin),
            ScanRule::new(r"\bimp(?:lements_protocol|orts_category)\(", call, Builtin),
            ScanRule::new(r"\b(?:instantiat|specializ)es_class\(", call, Builtin),
            // Events
            ScanRule::new(r"\b(?:current_event|(?:abolish|define)_events)\(", call, Builtin),
            // Logtalk flags
            ScanRule::new(r"\b(?:create|current|set)_logtalk_flag\(", call, Builtin),
            // Compiling, loading, and library paths
            ScanRule::new(
                r"\blogtalk_(?:compile|l(?:ibrary_path|oad|oad_context)|make(?:_target_action)?)\(",
                call,
                Builtin,
            ),
            ScanRule::new(r"\blogtalk_make\b", Gate::None, Builtin),
            // Database
            ScanRule::new(r"\b(?:clause|retract(?:all)?)\(", call, Builtin),
            ScanRule::new(r"\ba(?:bolish|ssert(?:a|z))\(", call, Builtin),
            // All solutions
            ScanRule::new(r"\b(?:(?:bag|set)of|f(?:ind|or)all)\(", call, Builtin),
            // Multi-threading
            ScanRule::new(
                r"\bthreaded(?:_(?:ca(?:ll|ncel)|once|ignore|exit|peek|wait|notify))?\(",
                call,
                Builtin,
            ),
            // Engines
            ScanRule::new(
                r"\bthreaded_engine(?:_(?:create|destroy|self|next|next_reified|yield|post|fetch))?\(",
                call,
                Builtin,
            ),
            // Term unification
            ScanRule::new(r"\b(?:subsumes_term|unify_with_occurs_check)\(", call, Builtin),
            // Term creation and decomposition
            ScanRule::new(
                r"\b(?:functor|arg|copy_term|numbervars|term_variables)\(",
                call,
                Builtin,
            ),
            // Stream selection and control
            ScanRule::new(r"\b(?:curren|se)t_(?:in|out)put\(", call, Builtin),
            ScanRule::new(r"\b(?:open|close)\(", call, Builtin),
            ScanRule::new(r"\bflush_output\(", call, Builtin),
            ScanRule::new(r"\b(?:at_end_of_stream|flush_output)\b", Gate::None, Builtin),
            ScanRule::new(
                r"\b(?:stream_property|at_end_of_stream|set_stream_position)\(",
                call,
                Builtin,
            ),
            // Character and byte input/output
            ScanRule::new(r"\b(?:(?:get|peek|put)_(?:char|code|byte)|nl)\(", call, Builtin),
            ScanRule::new(r"\bnl\b", Gate::None, Builtin),
            // Term input/output
            ScanRule::new(r"\bread(?:_term)?\(", call, Builtin),
            ScanRule::new(r"\bwrite(?:q|_(?:canonical|term))?\(", call, Builtin),
            ScanRule::new(r"\b(?:current_)?op\(", call, Builtin),
            ScanRule::new(r"\b(?:current_)?char_conversion\(", call, Builtin),
            // Atom and term processing
            ScanRule::new(
                r"\b(?:atom_(?:length|chars|concat|codes)|sub_atom|char_code|number_(?:char|code)s)\(",
                call,
                Builtin,
            ),
            // Term testing
            ScanRule::new(
                r"\b(?:var|atom(?:ic)?|integer|float|callable|compound|nonvar|number|ground|acyclic_term)\(",
                call,
                Builtin,
            ),
            // Term comparison
            ScanRule::new(r"\bcompare\(", call, Builtin),
            // Sorting
            ScanRule::new(r"\b(?:key)?sort\(", call, Builtin),
            // Prolog flags and halting
            ScanRule::new(r"\b(?:se|curren)t_prolog_flag\(", call, Builtin),
            ScanRule::new(r"\bhalt\b", Gate::None, Builtin),
            ScanRule::new(r"\bhalt\(", call, Builtin),
        ]
    });
    &RULES
}

/// Escape-sequence patterns tried inside quoted literals, in fixed order:
/// named control escapes, octal, hex, 4-digit unicode, 8-digit unicode,
/// line continuation.
pub fn escape_patterns() -> &'static [Regex] {
    static ESCAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
        [
            r#"\\[abfnrtv\\'"]"#,
            r"\\[0-7]+\\",
            r"\\x[0-9a-fA-F]+\\",
            r"\\u[0-9a-fA-F]{4}",
            r"\\U[0-9a-fA-F]{8}",
            r"\\\s",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("escape pattern must compile"))
        .collect()
    });
    &ESCAPES
}

/// `%` to end of line.
pub static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"%.*").expect("pattern"));

/// Radix-prefixed integers: binary, octal, hexadecimal.
pub static RADIX_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:0b[01]+|0o[0-7]+|0x[0-9a-fA-F]+)\b").expect("pattern"));

/// Character-code literals: `0'c` or `0'\e`. Only valid at line start or
/// after whitespace; the tokenizer checks the preceding character.
pub static CHAR_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"0'(?:\\.|.)").expect("pattern"));

/// Decimal integers and floats, with optional exponent.
pub static DECIMAL_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]+\.?[0-9]*(?:[eE][+-]?[0-9]+)?\b").expect("pattern"));

/// Uppercase- or underscore-initial identifiers.
pub static VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z_][A-Za-z0-9_]*\b").expect("pattern"));

/// Lowercase-initial identifiers with no recognized meaning.
pub static PLAIN_ATOM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z][A-Za-z0-9_]*\b").expect("pattern"));

/// Runs of whitespace.
pub static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("pattern"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        // Touch every lazy static so a bad pattern fails here, not mid-scan.
        assert!(!scan_rules().is_empty());
        assert_eq!(escape_patterns().len(), 6);
        Lazy::force(&LINE_COMMENT);
        Lazy::force(&RADIX_NUMBER);
        Lazy::force(&CHAR_CODE);
        Lazy::force(&DECIMAL_NUMBER);
        Lazy::force(&VARIABLE);
        Lazy::force(&PLAIN_ATOM);
        Lazy::force(&WHITESPACE);
    }

    #[test]
    fn test_scan_table_starts_with_entity_directives() {
        let rules = scan_rules();
        assert_eq!(rules[0].category, Category::Meta);
        assert_eq!(rules[1].category, Category::Meta);
    }

    #[test]
    fn test_call_gate_backtracks_across_prefix_alternatives() {
        // "include" must match even though "if" is an earlier alternative.
        let mut stream = LineStream::new(":- include(library)");
        let rule = scan_rules()
            .iter()
            .find_map(|rule| rule.try_eat(&mut stream).map(|text| (rule, text)));
        let (rule, text) = rule.expect("a rule should match");
        assert_eq!(text, ":- include");
        assert_eq!(rule.category, Category::Meta);
    }

    #[test]
    fn test_bare_keyword_gate_rejects_call_position() {
        // "mod(" fails the standalone-word gate and must fall through to the
        // builtin evaluable-function group.
        let mut stream = LineStream::new("mod(3, 2)");
        for rule in scan_rules() {
            if rule.try_eat(&mut stream).is_some() {
                assert_eq!(rule.category, Category::Builtin);
                assert_eq!(stream.pos(), 3);
                return;
            }
        }
        panic!("mod( should match the builtin group");
    }

    #[test]
    fn test_bare_keyword_matches_standalone() {
        let mut stream = LineStream::new("mod");
        for rule in scan_rules() {
            if rule.try_eat(&mut stream).is_some() {
                assert_eq!(rule.category, Category::Operator);
                return;
            }
        }
        panic!("bare mod should match the evaluable-word rule");
    }
}
