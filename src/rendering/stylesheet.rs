//! Default styles for the highlighting class names

use crate::grammar::Category;

struct Style {
    category: Category,
    colour: &'static str,
    bold: bool,
    italic: bool,
}

// Palette follows the Tango colours used elsewhere for code.
const STYLES: &[Style] = &[
    Style {
        category: Category::Keyword, // keyword.control - #75507b (purple)
        colour: "#75507b",
        bold: true,
        italic: false,
    },
    Style {
        category: Category::Literal, // string - #4e9a06 (green)
        colour: "#4e9a06",
        bold: false,
        italic: false,
    },
    Style {
        category: Category::Function, // entity.name.function - #3465a4 (blue)
        colour: "#3465a4",
        bold: true,
        italic: false,
    },
    Style {
        category: Category::Number, // constant.numeric - #ad7fa8 (light purple)
        colour: "#ad7fa8",
        bold: false,
        italic: false,
    },
    Style {
        category: Category::Class, // entity.name.type - #8f5902 (brown)
        colour: "#8f5902",
        bold: true,
        italic: false,
    },
    Style {
        category: Category::Comment, // comment - #999999 (grey)
        colour: "#999999",
        bold: false,
        italic: true,
    },
];

/// CSS rules mapping each emitted class name to a colour. Comments also
/// reset the weight and colour of anything nested inside them, since the
/// other passes will have wrapped words within comment text.
pub fn stylesheet() -> String {
    let mut result = String::new();

    for style in STYLES {
        result.push('.');
        result.push_str(
            style
                .category
                .class_name(),
        );
        result.push_str(" { color: ");
        result.push_str(style.colour);
        result.push(';');
        if style.bold {
            result.push_str(" font-weight: bold;");
        }
        if style.italic {
            result.push_str(" font-style: italic;");
        }
        result.push_str(" }\n");
    }

    result.push_str(".code-comment span { color: inherit; font-weight: inherit; }\n");
    result
}
