//! Grammar for the Dart programming language

use super::{Flags, Grammar, Pattern};

const KEYWORDS: &[&str] = &[
    "abstract",
    "else",
    "import",
    "show",
    "as",
    "enum",
    "in",
    "static",
    "assert",
    "export",
    "interface",
    "super",
    r"async\*?",
    "extends",
    "is",
    "switch",
    "await",
    "extension",
    "late",
    r"sync\*?",
    "break",
    "external",
    "library",
    "this",
    "case",
    "factory",
    "mixin",
    "throw",
    "catch",
    "false",
    "new",
    "true",
    "class",
    "final",
    "null",
    "try",
    "const",
    "finally",
    "on",
    "typedef",
    "continue",
    "for",
    "operator",
    "var",
    "covariant",
    "Function",
    "part",
    "void",
    "default",
    "get",
    "required",
    "while",
    "deferred",
    "hide",
    "rethrow",
    "with",
    "do",
    "if",
    "return",
    "yield",
    "dynamic",
    "implements",
    "set",
];

pub struct Dart;

impl Grammar for Dart {
    fn name(&self) -> &str {
        "dart"
    }

    fn extensions(&self) -> Vec<&str> {
        vec!["dart"]
    }

    fn comments(&self) -> Option<Pattern> {
        Some(Pattern::with_flags(
            r"(//[^\n]*)|(/\*.*?\*/)",
            Flags::dot_all(),
        ))
    }

    fn keywords(&self) -> Option<Pattern> {
        Some(Pattern::keywords(KEYWORDS))
    }

    fn numbers(&self) -> Option<Pattern> {
        Some(Pattern::new(r"\b\d+(\.\d+)?\b"))
    }

    // The (?!>) guards keep the pattern off the quotes of the class
    // attributes that the keyword pass has already inserted.
    fn literals(&self) -> Option<Pattern> {
        let single = Pattern::new(r"'(?!>)((\\')|[^'])*'(?!>)");
        let double = Pattern::new(r#"|"(?!>)((\\")|[^"])*"(?!>)"#);

        Some(single.concat(&double))
    }

    fn classes(&self) -> Option<Pattern> {
        Some(Pattern::new(
            r"\b((int)|(bool)|(double)|(num)|([A-Z][A-Za-z]*(<[\w?]+>)?(\(.*\))?))\b",
        ))
    }

    fn identifiers(&self) -> Option<Pattern> {
        Some(Pattern::new(r"\b[a-zA-Z_]\w*\b"))
    }
}
