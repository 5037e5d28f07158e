use super::messages::{grammar_error_message, highlight_error_message};
use owo_colors::OwoColorize;
use std::path::Path;
use overlay::error::{GrammarError, HighlightError, LoadingError};

/// Format a highlighting error with its explanation
pub fn full_highlight_error(error: &HighlightError, filename: &Path) -> String {
    let (problem, details) = highlight_error_message(error);

    format!(
        r#"
{}: {} {}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        problem.bold(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a grammar description error with its explanation
pub fn full_grammar_error(error: &GrammarError, filename: &Path) -> String {
    let (problem, details) = grammar_error_message(error);

    format!(
        r#"
{}: {} {}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        problem.bold(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

/// Format a failure to find a grammar for the given file
pub fn concise_unknown_language(filename: &Path, language: Option<&str>) -> String {
    match language {
        Some(language) => format!(
            "{}: {}: {} '{}'",
            "error".bright_red(),
            filename.to_string_lossy(),
            "Unknown language".bold(),
            language
        ),
        None => format!(
            "{}: {}: {}",
            "error".bright_red(),
            filename.to_string_lossy(),
            "Unable to determine language; use --language".bold()
        ),
    }
}

#[cfg(test)]
mod check {
    use super::*;
    use overlay::grammar::Category;

    #[test]
    fn highlight_error_names_category() {
        let problem = fancy_regex::Regex::new(r"(\d+").unwrap_err();
        let error = HighlightError::InvalidPattern {
            category: Category::Number,
            pattern: r"(\d+".to_string(),
            problem,
        };

        let result = full_highlight_error(&error, Path::new("main.dart"));
        assert!(result.contains("main.dart"));
        assert!(result.contains("Invalid pattern for code-number-literal"));
        assert!(result.contains("could not be compiled"));
        assert!(result.contains(r"    (\d+"));
    }

    #[test]
    fn loading_error_single_line() {
        let error = LoadingError {
            problem: "File not found".to_string(),
            details: String::new(),
            filename: Path::new("missing.dart"),
        };
        let result = concise_loading_error(&error);
        assert!(result.contains("missing.dart: "));
        assert!(result.contains("File not found"));
    }
}
