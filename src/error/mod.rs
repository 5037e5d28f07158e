// Errors surfaced to callers of the library

use std::{fmt, path::Path};

use crate::grammar::Category;

/// Failure while applying a grammar. Either the pattern for a category did
/// not compile, or it gave up while matching (by exhausting its
/// backtracking budget). Passes that completed before the failure have
/// already been written back to the content. The offending pattern's
/// source is kept so it can be shown to whoever wrote the grammar.
#[derive(Debug)]
pub enum HighlightError {
    InvalidPattern {
        category: Category,
        pattern: String,
        problem: fancy_regex::Error,
    },
    MatchFailed {
        category: Category,
        pattern: String,
        problem: fancy_regex::Error,
    },
}

impl HighlightError {
    pub fn category(&self) -> Category {
        match self {
            HighlightError::InvalidPattern { category, .. } => *category,
            HighlightError::MatchFailed { category, .. } => *category,
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            HighlightError::InvalidPattern { pattern, .. } => pattern,
            HighlightError::MatchFailed { pattern, .. } => pattern,
        }
    }

    pub fn problem(&self) -> &fancy_regex::Error {
        match self {
            HighlightError::InvalidPattern { problem, .. } => problem,
            HighlightError::MatchFailed { problem, .. } => problem,
        }
    }

    pub fn message(&self) -> String {
        match self {
            HighlightError::InvalidPattern { category, .. } => {
                format!("invalid pattern for {}", category.class_name())
            }
            HighlightError::MatchFailed { category, .. } => {
                format!("matching failed for {}", category.class_name())
            }
        }
    }
}

impl fmt::Display for HighlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} `{}`: {}",
            self.message(),
            self.pattern(),
            self.problem()
        )
    }
}

impl std::error::Error for HighlightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.problem())
    }
}

/// Problems with a grammar description read from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    Unreadable(String),
    InvalidSyntax(String),
    InvalidName(String),
    InvalidExtension(String),
}

impl GrammarError {
    pub fn message(&self) -> String {
        match self {
            GrammarError::Unreadable(_) => "unable to read grammar".to_string(),
            GrammarError::InvalidSyntax(_) => "invalid grammar description".to_string(),
            GrammarError::InvalidName(name) => format!("invalid language name '{}'", name),
            GrammarError::InvalidExtension(extension) => {
                format!("invalid file extension '{}'", extension)
            }
        }
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::Unreadable(details) => write!(f, "{}: {}", self.message(), details),
            GrammarError::InvalidSyntax(details) => write!(f, "{}: {}", self.message(), details),
            _ => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for GrammarError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self
            .details
            .is_empty()
        {
            write!(f, "{}", self.problem)
        } else {
            write!(f, "{}: {}", self.problem, self.details)
        }
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}
