//! Pattern-overlay syntax highlighting.
//!
//! A [`grammar::Grammar`] describes a language as six regular expressions,
//! one per lexical category. [`highlighting::highlight`] applies them one
//! after another to a piece of content, wrapping every match in a
//! `<span class="code-…">` element. Each pass runs over the output of the
//! previous one, so the order of the categories and the shape of the
//! patterns are what keep the inserted markup intact.

#[macro_use]
mod regex;

pub mod error;
pub mod grammar;
pub mod highlighting;
pub mod rendering;
pub mod source;
