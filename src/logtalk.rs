//! Main module for Logtalk language support functionality

pub mod indent;
pub mod language;
pub mod lexing;
