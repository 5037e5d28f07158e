//! Language grammars expressed as one pattern per lexical category.

mod configured;
mod dart;
mod pattern;
mod registry;

pub use configured::Configured;
pub use dart::Dart;
pub use pattern::{backtrack_limit, Flags, Pattern, DEFAULT_BACKTRACK_LIMIT};
pub use registry::Registry;

pub const KEYWORD_CLASS: &str = "code-keyword";
pub const LITERAL_CLASS: &str = "code-literal";
pub const NUMBER_CLASS: &str = "code-number-literal";
pub const CLASS_CLASS: &str = "code-class";
pub const FUNCTION_CLASS: &str = "code-function";
pub const COMMENT_CLASS: &str = "code-comment";
// Defined for stylesheets, but never emitted: identifiers take on the
// formatting of whatever element they sit inside.
pub const IDENTIFIER_CLASS: &str = "code-identifier";

/// Lexical categories that can be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Literal,
    Function,
    Number,
    Class,
    Comment,
    Identifier,
}

impl Category {
    /// The class attribute emitted around matches of this category.
    pub fn class_name(&self) -> &'static str {
        match self {
            Category::Keyword => KEYWORD_CLASS,
            Category::Literal => LITERAL_CLASS,
            Category::Function => FUNCTION_CLASS,
            Category::Number => NUMBER_CLASS,
            Category::Class => CLASS_CLASS,
            Category::Comment => COMMENT_CLASS,
            Category::Identifier => IDENTIFIER_CLASS,
        }
    }
}

/// The zero-width tail that turns an identifier into a call site.
const CALL_SITE: &str = r" *(?=\()";

/// A language, described as one pattern producer per category. A producer
/// returning `None` (or an empty pattern) leaves that category out.
///
/// Highlighting runs the categories in the order given by [`get()`], each
/// pass over text already carrying the markup of the passes before it.
/// Patterns therefore have to avoid matching across, or inside, the tags
/// inserted earlier; word boundaries and narrow lookaheads do that work.
///
/// [`get()`]: Grammar::get
pub trait Grammar: Send + Sync {
    /// Identifier used to select this grammar, lower case.
    fn name(&self) -> &str;

    /// File extensions (without the dot) this grammar is chosen for.
    fn extensions(&self) -> Vec<&str>;

    /// Single line `//` and block `/* */` comments.
    fn comments(&self) -> Option<Pattern>;

    /// Reserved words, each followed by one of a handful of characters.
    fn keywords(&self) -> Option<Pattern>;

    /// Integer and decimal number literals.
    fn numbers(&self) -> Option<Pattern>;

    /// Quoted string constants.
    fn literals(&self) -> Option<Pattern>;

    /// Built-in types and capitalized type names.
    fn classes(&self) -> Option<Pattern>;

    /// Any whole-word identifier. Not highlighted on its own; it would
    /// clash with, and make redundant, the narrower function pattern.
    fn identifiers(&self) -> Option<Pattern>;

    /// Identifiers in call position, that is followed by an opening
    /// parenthesis.
    fn functions(&self) -> Option<Pattern> {
        self.identifiers()
            .map(|identifiers| identifiers.concat(&Pattern::new(CALL_SITE)))
    }

    /// The highlighting plan: categories paired with their patterns, in
    /// the order they are to be applied.
    fn get(&self) -> Vec<(Category, Option<Pattern>)> {
        vec![
            (Category::Keyword, self.keywords()),
            (Category::Literal, self.literals()),
            (Category::Function, self.functions()),
            (Category::Number, self.numbers()),
            (Category::Class, self.classes()),
            (Category::Comment, self.comments()),
        ]
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn class_names() {
        assert_eq!(Category::Keyword.class_name(), "code-keyword");
        assert_eq!(Category::Literal.class_name(), "code-literal");
        assert_eq!(Category::Number.class_name(), "code-number-literal");
        assert_eq!(Category::Class.class_name(), "code-class");
        assert_eq!(Category::Function.class_name(), "code-function");
        assert_eq!(Category::Comment.class_name(), "code-comment");
        assert_eq!(Category::Identifier.class_name(), "code-identifier");
    }

    #[test]
    fn plan_order_is_fixed() {
        let categories: Vec<Category> = Dart
            .get()
            .into_iter()
            .map(|(category, _)| category)
            .collect();

        assert_eq!(
            categories,
            vec![
                Category::Keyword,
                Category::Literal,
                Category::Function,
                Category::Number,
                Category::Class,
                Category::Comment,
            ]
        );
    }

    #[test]
    fn identifiers_are_not_in_the_plan() {
        assert!(Dart
            .get()
            .iter()
            .all(|(category, _)| *category != Category::Identifier));
    }

    #[test]
    fn functions_derive_from_identifiers() {
        let functions = Dart
            .functions()
            .unwrap();
        let identifiers = Dart
            .identifiers()
            .unwrap();

        assert!(functions
            .source()
            .starts_with(identifiers.source()));
        assert!(functions
            .source()
            .ends_with(CALL_SITE));
    }
}
