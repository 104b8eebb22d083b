//! # lgt-lex
//!
//! A streaming lexer and indentation advisor for the Logtalk language,
//! built to drive syntax highlighting and auto-indentation in editors.
//!
//! Two independent components:
//!
//! - the [tokenizer](logtalk::lexing): consumes a line at a time, carries
//!   open-comment/open-literal state across line boundaries, and
//!   classifies each consumed span into a fixed set of categories;
//! - the [indentation advisor](logtalk::indent): inspects a line and the
//!   nearest non-blank line above it and suggests an indentation width.
//!
//! Both tolerate malformed, partial input without failing: there is no
//! error channel, only spans with no classification.

pub mod logtalk;
