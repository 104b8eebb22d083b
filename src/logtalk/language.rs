//! Language descriptor
//!
//! The registration payload a host editor consumes: stable identifier,
//! file extensions, MIME type, comment markers, and the bracket characters
//! eligible for auto-closing. The crate only declares this data; wiring it
//! into an editor is host-integration glue.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lines matching this pattern should trigger re-indentation as they are
/// typed: entity openers, entity closers, bare necks, clause-ending
/// periods.
static REINDENT_TRIGGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?::-\s(?:object|protocol|category|module)\(.*|:-\send_(?:object|protocol|category)\.|:-|\.)",
    )
    .expect("pattern")
});

/// Static description of the Logtalk language for editor registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LanguageDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub mime_types: &'static [&'static str],
    pub extensions: &'static [&'static str],
    pub line_comment: &'static str,
    pub block_comment: (&'static str, &'static str),
    /// Characters the editor may auto-close, quotes included.
    pub auto_close: &'static [char],
}

impl LanguageDescriptor {
    /// The Logtalk descriptor.
    pub fn logtalk() -> Self {
        Self {
            id: "logtalk",
            display_name: "Logtalk",
            mime_types: &["text/x-logtalk"],
            extensions: &["lgt", "logtalk"],
            line_comment: "%",
            block_comment: ("/*", "*/"),
            auto_close: &['(', '[', '{', '\'', '"'],
        }
    }

    /// The compiled re-indent trigger pattern.
    pub fn reindent_trigger() -> &'static Regex {
        &REINDENT_TRIGGER
    }

    /// Whether typing `line` should prompt the editor to re-indent it.
    pub fn should_reindent(line: &str) -> bool {
        REINDENT_TRIGGER.is_match(line)
    }

    /// Whether `path_extension` (without the dot) belongs to this language.
    pub fn matches_extension(&self, path_extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(path_extension))
    }
}
