//! Regular expression sources and the helpers used to assemble them.

use fancy_regex::{Regex, RegexBuilder};

/// Characters allowed to follow a keyword. Anything else (notably a further
/// identifier character) means the keyword is only a prefix of a longer
/// word and must not be highlighted.
const KEYWORD_FOLLOWERS: &str = r"(?=[ \.{\[\);])";

/// Backtracking steps allowed for a single search when nothing is known
/// about the text being searched. This is fancy-regex's own default.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Backtracking steps allowed per byte of text searched. A search runs over
/// every start position up to the next match, so the budget has to grow
/// with the text or long stretches without a match exhaust it.
const BACKTRACK_PER_BYTE: usize = 1_000;

/// The backtracking budget for searching `text`.
pub fn backtrack_limit(text: &str) -> usize {
    text.len()
        .saturating_mul(BACKTRACK_PER_BYTE)
        .max(DEFAULT_BACKTRACK_LIMIT)
}

/// Matching modes applied to a whole pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
}

impl Flags {
    pub fn dot_all() -> Flags {
        Flags {
            dot_matches_new_line: true,
            ..Flags::default()
        }
    }

    fn inline(&self) -> String {
        let mut result = String::new();
        if self.case_insensitive {
            result.push('i');
        }
        if self.multi_line {
            result.push('m');
        }
        if self.dot_matches_new_line {
            result.push('s');
        }
        result
    }
}

/// The source of a regular expression together with its flags. Patterns
/// are plain values; they are only turned into a matcher by [`compile()`],
/// which is where a malformed source is discovered.
///
/// [`compile()`]: Pattern::compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    flags: Flags,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Pattern {
        Pattern {
            source: source.into(),
            flags: Flags::default(),
        }
    }

    pub fn with_flags(source: impl Into<String>, flags: Flags) -> Pattern {
        Pattern {
            source: source.into(),
            flags,
        }
    }

    /// Build a pattern matching any of the given keywords as a whole word.
    /// Each entry is itself a regular expression fragment (so `async\*?` is
    /// fine), and is grouped on its own before the alternatives are joined.
    pub fn keywords<S: AsRef<str>>(list: &[S]) -> Pattern {
        let alternatives: Vec<String> = list
            .iter()
            .map(|keyword| format!("({})", keyword.as_ref()))
            .collect();

        Pattern::new(format!(
            r"\b({}){}",
            alternatives.join("|"),
            KEYWORD_FOLLOWERS
        ))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// An empty pattern stands for a category the grammar does not cover.
    pub fn is_empty(&self) -> bool {
        self.source
            .is_empty()
    }

    /// Append `other` to this pattern. Only this pattern's flags survive;
    /// whatever flags `other` carried are dropped.
    pub fn concat(&self, other: &Pattern) -> Pattern {
        let mut source = String::with_capacity(
            self.source
                .len()
                + other
                    .source
                    .len(),
        );
        source.push_str(&self.source);
        source.push_str(&other.source);

        Pattern {
            source,
            flags: self.flags,
        }
    }

    pub fn compile(&self) -> Result<Regex, fancy_regex::Error> {
        self.compile_with_limit(DEFAULT_BACKTRACK_LIMIT)
    }

    /// Compile, allowing each search up to `limit` backtracking steps before
    /// it gives up with an error.
    pub fn compile_with_limit(&self, limit: usize) -> Result<Regex, fancy_regex::Error> {
        let flags = self
            .flags
            .inline();

        let source = if flags.is_empty() {
            self.source
                .clone()
        } else {
            format!("(?{}:{})", flags, self.source)
        };

        RegexBuilder::new(&source)
            .backtrack_limit(limit)
            .build()
    }
}
