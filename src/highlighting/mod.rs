//! The overlay engine: apply a grammar's patterns to content, one category
//! at a time.

use fancy_regex::Regex;
use tracing::debug;

use crate::error::HighlightError;
use crate::grammar::{backtrack_limit, Category, Grammar};

mod render;

pub use render::{escape_html, Html, Render};

/// Something holding text that can be read and replaced wholesale.
pub trait Content {
    fn content(&self) -> &str;

    fn set_content(&mut self, content: String);
}

impl Content for String {
    fn content(&self) -> &str {
        self.as_str()
    }

    fn set_content(&mut self, content: String) {
        *self = content;
    }
}

/// Highlight the content in place, wrapping matches in `<span>` elements.
pub fn highlight(
    container: &mut impl Content,
    grammar: &dyn Grammar,
) -> Result<(), HighlightError> {
    highlight_with(container, grammar, &Html)
}

/// Highlight the content in place using the given markup.
///
/// Each category in the grammar's plan is applied to the content as it
/// stands after the previous category, and the result written back before
/// moving on. Categories without a pattern are skipped. The first pattern
/// that fails to compile or to match ends the run; the passes before it
/// remain applied. A search may backtrack in proportion to the length of
/// the content before it is abandoned as a match failure.
///
/// This is not idempotent. Running it a second time will match again
/// inside markup from the first run, nesting wrappers (numbers in
/// particular end up wrapped twice).
pub fn highlight_with(
    container: &mut impl Content,
    grammar: &dyn Grammar,
    renderer: &impl Render,
) -> Result<(), HighlightError> {
    for (category, pattern) in grammar.get() {
        let pattern = match pattern {
            Some(pattern) if !pattern.is_empty() => pattern,
            _ => {
                debug!("Skipping {}: no pattern", category.class_name());
                continue;
            }
        };

        let limit = backtrack_limit(container.content());
        let regex = pattern
            .compile_with_limit(limit)
            .map_err(|problem| HighlightError::InvalidPattern {
                category,
                pattern: pattern
                    .source()
                    .to_string(),
                problem,
            })?;

        let (result, count) = overlay(&regex, container.content(), category, renderer)
            .map_err(|problem| HighlightError::MatchFailed {
                category,
                pattern: pattern
                    .source()
                    .to_string(),
                problem,
            })?;

        debug!(
            "Pass {}: {} match{}",
            category.class_name(),
            count,
            if count == 1 { "" } else { "es" }
        );

        if count > 0 {
            container.set_content(result);
        }
    }

    Ok(())
}

/// Wrap every non-overlapping match in `text`, returning the rewritten text
/// and how many matches were wrapped. Empty matches are left alone.
fn overlay(
    regex: &Regex,
    text: &str,
    category: Category,
    renderer: &impl Render,
) -> Result<(String, usize), fancy_regex::Error> {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0;

    for found in regex.find_iter(text) {
        let found = found?;
        if found.start() == found.end() {
            continue;
        }

        output.push_str(&text[last..found.start()]);
        output.push_str(&renderer.wrap(category, found.as_str()));
        last = found.end();
        count += 1;
    }

    output.push_str(&text[last..]);

    Ok((output, count))
}
