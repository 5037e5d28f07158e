//! Grammars described in TOML files rather than compiled in.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::{Flags, Grammar, Pattern};
use crate::error::GrammarError;

#[derive(Deserialize, Debug)]
struct PatternDesc {
    source: String,
    #[serde(default)]
    case_insensitive: bool,
    #[serde(default)]
    multi_line: bool,
    #[serde(default)]
    dot_matches_new_line: bool,
}

impl PatternDesc {
    fn pattern(self) -> Pattern {
        Pattern::with_flags(
            self.source,
            Flags {
                case_insensitive: self.case_insensitive,
                multi_line: self.multi_line,
                dot_matches_new_line: self.dot_matches_new_line,
            },
        )
    }
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct GrammarDesc {
    name: String,
    #[serde(default)]
    extensions: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
    comments: Option<PatternDesc>,
    numbers: Option<PatternDesc>,
    literals: Option<PatternDesc>,
    classes: Option<PatternDesc>,
    identifiers: Option<PatternDesc>,
}

/// A grammar read from a description such as:
///
/// ```toml
/// name = "pseudo"
/// extensions = ["pseudo"]
/// keywords = ["if", "else"]
///
/// [numbers]
/// source = '\b\d+\b'
/// ```
///
/// Any category left out of the description is skipped when highlighting,
/// so a grammar can be built up a category at a time. The function pattern
/// is derived from `identifiers`, as for every other grammar.
#[derive(Debug, Clone)]
pub struct Configured {
    name: String,
    extensions: Vec<String>,
    keywords: Option<Pattern>,
    comments: Option<Pattern>,
    numbers: Option<Pattern>,
    literals: Option<Pattern>,
    classes: Option<Pattern>,
    identifiers: Option<Pattern>,
}

impl Configured {
    pub fn parse(content: &str) -> Result<Configured, GrammarError> {
        let desc: GrammarDesc = basic_toml::from_str(content)
            .map_err(|error| GrammarError::InvalidSyntax(error.to_string()))?;

        if !is_valid_name(&desc.name) {
            return Err(GrammarError::InvalidName(desc.name));
        }
        let name = desc.name;

        let mut extensions = Vec::with_capacity(
            desc.extensions
                .len(),
        );
        for extension in desc.extensions {
            let extension = extension.trim_start_matches('.');
            if !is_valid_extension(extension) {
                return Err(GrammarError::InvalidExtension(extension.to_string()));
            }
            extensions.push(extension.to_string());
        }

        let keywords = if desc
            .keywords
            .is_empty()
        {
            None
        } else {
            Some(Pattern::keywords(&desc.keywords))
        };

        debug!(
            "Grammar {} describes {} keyword{}",
            name,
            desc.keywords
                .len(),
            if desc
                .keywords
                .len()
                == 1
            {
                ""
            } else {
                "s"
            }
        );

        let grammar = Configured {
            name,
            extensions,
            keywords,
            comments: desc
                .comments
                .map(PatternDesc::pattern),
            numbers: desc
                .numbers
                .map(PatternDesc::pattern),
            literals: desc
                .literals
                .map(PatternDesc::pattern),
            classes: desc
                .classes
                .map(PatternDesc::pattern),
            identifiers: desc
                .identifiers
                .map(PatternDesc::pattern),
        };

        if grammar
            .get()
            .iter()
            .all(|(_, pattern)| pattern.is_none())
        {
            warn!(
                "Grammar {} describes no patterns; nothing will be highlighted",
                grammar.name
            );
        }

        Ok(grammar)
    }

    /// Read and parse a grammar description file.
    pub fn load(filename: &Path) -> Result<Configured, GrammarError> {
        let content = crate::source::load(filename).map_err(|error| {
            GrammarError::Unreadable(format!("{}: {}", filename.display(), error))
        })?;

        Configured::parse(&content)
    }
}

fn is_valid_name(name: &str) -> bool {
    let re = regex!(r"^[a-z][a-z0-9_+-]*$");
    re.is_match(name)
}

fn is_valid_extension(extension: &str) -> bool {
    let re = regex!(r"^[A-Za-z0-9_+-]+$");
    re.is_match(extension)
}

impl Grammar for Configured {
    fn name(&self) -> &str {
        &self.name
    }

    fn extensions(&self) -> Vec<&str> {
        self.extensions
            .iter()
            .map(String::as_str)
            .collect()
    }

    fn comments(&self) -> Option<Pattern> {
        self.comments
            .clone()
    }

    fn keywords(&self) -> Option<Pattern> {
        self.keywords
            .clone()
    }

    fn numbers(&self) -> Option<Pattern> {
        self.numbers
            .clone()
    }

    fn literals(&self) -> Option<Pattern> {
        self.literals
            .clone()
    }

    fn classes(&self) -> Option<Pattern> {
        self.classes
            .clone()
    }

    fn identifiers(&self) -> Option<Pattern> {
        self.identifiers
            .clone()
    }
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::grammar::Category;

    #[test]
    fn minimal_description() {
        let grammar = Configured::parse(r#"name = "pseudo""#).unwrap();

        assert_eq!(grammar.name(), "pseudo");
        assert!(grammar
            .extensions()
            .is_empty());
        assert!(grammar
            .get()
            .iter()
            .all(|(_, pattern)| pattern.is_none()));
    }

    #[test]
    fn full_description() {
        let grammar = Configured::parse(
            r#"
name = "pseudo"
extensions = [".ps", "pseudo"]
keywords = ["if", "then"]

[comments]
source = '#[^\n]*'

[numbers]
source = '\b\d+\b'

[identifiers]
source = '\b[a-z]+\b'
case_insensitive = true
            "#,
        )
        .unwrap();

        assert_eq!(grammar.extensions(), vec!["ps", "pseudo"]);
        assert_eq!(
            grammar
                .keywords()
                .unwrap()
                .source(),
            r"\b((if)|(then))(?=[ \.{\[\);])"
        );

        let functions = grammar
            .functions()
            .unwrap();
        assert_eq!(functions.source(), r"\b[a-z]+\b *(?=\()");
        assert!(functions
            .flags()
            .case_insensitive);

        let present: Vec<Category> = grammar
            .get()
            .into_iter()
            .filter(|(_, pattern)| pattern.is_some())
            .map(|(category, _)| category)
            .collect();
        assert_eq!(
            present,
            vec![
                Category::Keyword,
                Category::Function,
                Category::Number,
                Category::Comment
            ]
        );
    }

    #[test]
    fn bad_name_rejected() {
        let result = Configured::parse(r#"name = "9lives""#);
        assert_eq!(
            result.unwrap_err(),
            GrammarError::InvalidName("9lives".to_string())
        );
    }

    #[test]
    fn name_must_be_lower_case() {
        let result = Configured::parse(r#"name = "Pseudo""#);
        assert_eq!(
            result.unwrap_err(),
            GrammarError::InvalidName("Pseudo".to_string())
        );
    }

    #[test]
    fn bad_extension_rejected() {
        let result = Configured::parse(
            r#"
name = "pseudo"
extensions = ["p s"]
            "#,
        );
        assert_eq!(
            result.unwrap_err(),
            GrammarError::InvalidExtension("p s".to_string())
        );
    }

    #[test]
    fn unknown_fields_rejected() {
        let result = Configured::parse(
            r#"
name = "pseudo"
colour = "red"
            "#,
        );
        assert!(matches!(result, Err(GrammarError::InvalidSyntax(_))));
    }
}
