//! Markup placed around highlighted matches

use std::borrow::Cow;

use crate::grammar::Category;

/// How a match is wrapped. Grammars are written against the markup they
/// will later have to scan over, so an alternative renderer has to keep to
/// the same shape (tags delimited by `<` and `>`, attribute values in
/// double quotes) or the later passes will start matching inside it.
pub trait Render {
    /// Wrap the matched text for the given category.
    fn wrap(&self, category: Category, content: &str) -> String;
}

/// `<span class="code-…">` elements, for inclusion in HTML.
pub struct Html;

impl Render for Html {
    fn wrap(&self, category: Category, content: &str) -> String {
        markup(category.class_name(), content)
    }
}

fn markup(class: &str, content: &str) -> String {
    let mut result = String::with_capacity(13 + class.len() + 2 + content.len() + 7);
    result.push_str("<span class=\"");
    result.push_str(class);
    result.push_str("\">");
    result.push_str(content);
    result.push_str("</span>");
    result
}

/// Replace the three characters that would otherwise be taken as markup.
/// Content destined for highlighting has to be escaped first, the same way
/// the text of an HTML element already is.
pub fn escape_html(content: &str) -> Cow<'_, str> {
    if !content.contains(['&', '<', '>']) {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len() + 16);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
