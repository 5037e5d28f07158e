use overlay::error::{GrammarError, HighlightError};

/// Generate problem and detail messages for highlighting errors
pub fn highlight_error_message(error: &HighlightError) -> (String, String) {
    match error {
        HighlightError::InvalidPattern {
            category,
            pattern,
            problem,
        } => (
            format!("Invalid pattern for {}", category.class_name()),
            format!(
                r#"
The grammar's pattern for this category could not be compiled:

    {}

{}

Categories before it have already been applied to the content.
                "#,
                pattern, problem
            )
            .trim_ascii()
            .to_string(),
        ),
        HighlightError::MatchFailed {
            category,
            pattern,
            problem,
        } => (
            format!("Matching failed for {}", category.class_name()),
            format!(
                r#"
The grammar's pattern for this category compiled but gave up while
scanning the content:

    {}

{}

This usually means the pattern backtracks excessively on this input.
                "#,
                pattern, problem
            )
            .trim_ascii()
            .to_string(),
        ),
    }
}

/// Generate problem and detail messages for grammar description errors
pub fn grammar_error_message(error: &GrammarError) -> (String, String) {
    match error {
        GrammarError::Unreadable(details) => ("Unable to read grammar".to_string(), details.clone()),
        GrammarError::InvalidSyntax(details) => (
            "Invalid grammar description".to_string(),
            details
                .trim_ascii()
                .to_string(),
        ),
        GrammarError::InvalidName(name) => (
            format!("Invalid language name '{}'", name),
            "Language names start with a lower case letter and contain only letters, digits, '_', '+' and '-'."
                .to_string(),
        ),
        GrammarError::InvalidExtension(extension) => (
            format!("Invalid file extension '{}'", extension),
            "Extensions contain only letters, digits, '_', '+' and '-'.".to_string(),
        ),
    }
}
