//! Token categories produced by the lexer
//!
//! The rendering layer keys styles on the wire names, which follow the
//! conventional highlighting vocabulary (`comment`, `string.escape`, ...).
//! "No classification" is expressed as `Option<Category>::None` at the
//! tokenizer boundary, never as a variant here.

use std::fmt;

/// The closed set of lexical categories.
///
/// Serializes as the wire name, so exported spans speak the same
/// vocabulary the rendering layer keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    /// Line or block comment text
    #[serde(rename = "comment")]
    Comment,

    /// Escape sequence inside a quoted literal
    #[serde(rename = "string.escape")]
    Escape,

    /// Double-quoted term content
    #[serde(rename = "string")]
    String,

    /// Quoted atom content (single-quoted)
    #[serde(rename = "atom")]
    Atom,

    /// Entity and compiler directives, entity relation keywords
    #[serde(rename = "meta")]
    Meta,

    /// Operators, including standalone evaluable-function words
    #[serde(rename = "operator")]
    Operator,

    /// Built-in predicate names in call position
    #[serde(rename = "builtin")]
    Builtin,

    /// Integer, float, radix-prefixed, and character-code literals
    #[serde(rename = "number")]
    Number,

    /// Uppercase- or underscore-initial variable names
    #[serde(rename = "variable")]
    Variable,
}

impl Category {
    /// The stable identifier the rendering layer keys on.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::Escape => "string.escape",
            Category::String => "string",
            Category::Atom => "atom",
            Category::Meta => "meta",
            Category::Operator => "operator",
            Category::Builtin => "builtin",
            Category::Number => "number",
            Category::Variable => "variable",
        }
    }

    /// All categories, in declaration order.
    pub const ALL: [Category; 9] = [
        Category::Comment,
        Category::Escape,
        Category::String,
        Category::Atom,
        Category::Meta,
        Category::Operator,
        Category::Builtin,
        Category::Number,
        Category::Variable,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}
