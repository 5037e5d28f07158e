#[cfg(test)]
mod verify {
    use std::path::Path;

    use overlay::error::{GrammarError, HighlightError};
    use overlay::grammar::*;
    use overlay::highlighting::{escape_html, highlight};
    use overlay::source::Source;

    #[test]
    fn partial_grammar_from_file() {
        let grammar = Configured::load(Path::new("tests/grammars/pseudo.toml")).unwrap();
        assert_eq!(grammar.name(), "pseudo");

        let mut content = String::from("let x = 5 # five\nif x then show(x) end;\n");
        highlight(&mut content, &grammar).unwrap();

        assert_eq!(
            content,
            "<span class=\"code-keyword\">let</span> x = <span class=\"code-number-literal\">5</span> <span class=\"code-comment\"># five</span>\n<span class=\"code-keyword\">if</span> x <span class=\"code-keyword\">then</span> <span class=\"code-function\">show</span>(x) <span class=\"code-keyword\">end</span>;\n"
        );
    }

    #[test]
    fn keyword_at_end_of_line_is_not_highlighted() {
        let grammar = Configured::load(Path::new("tests/grammars/pseudo.toml")).unwrap();

        let mut content = String::from("end\n");
        highlight(&mut content, &grammar).unwrap();

        assert_eq!(content, "end\n");
    }

    #[test]
    fn broken_pattern_is_reported() {
        let grammar = Configured::load(Path::new("tests/grammars/broken.toml")).unwrap();

        let mut content = String::from("let x = 5;");
        let result = highlight(&mut content, &grammar);

        match result {
            Err(HighlightError::InvalidPattern {
                category, pattern, ..
            }) => {
                assert_eq!(category, Category::Number);
                assert_eq!(pattern, r"(\d+");
            }
            _ => panic!("expected an invalid pattern error"),
        }
        assert_eq!(content, r#"<span class="code-keyword">let</span> x = 5;"#);
    }

    #[test]
    fn runaway_pattern_fails_while_matching() {
        let grammar = Configured::parse(
            r#"
name = "runaway"
keywords = ["let"]

[numbers]
source = '((?!x)a+)+b'
            "#,
        )
        .unwrap();

        let run = "a".repeat(40);
        let mut content = format!("let s = {};", run);
        let result = highlight(&mut content, &grammar);

        match result {
            Err(HighlightError::MatchFailed {
                category, pattern, ..
            }) => {
                assert_eq!(category, Category::Number);
                assert_eq!(pattern, "((?!x)a+)+b");
            }
            _ => panic!("expected matching to fail"),
        }

        // the keyword pass completed before the number pass gave up
        assert_eq!(
            content,
            format!(r#"<span class="code-keyword">let</span> s = {};"#, run)
        );
    }

    #[test]
    fn invalid_name_is_rejected() {
        let result = Configured::load(Path::new("tests/grammars/misnamed.toml"));
        assert_eq!(
            result.unwrap_err(),
            GrammarError::InvalidName("Not A Name".to_string())
        );
    }

    #[test]
    fn missing_grammar_file() {
        let result = Configured::load(Path::new("tests/grammars/nowhere.toml"));
        assert!(matches!(result, Err(GrammarError::Unreadable(_))));
    }

    #[test]
    fn registered_grammar_selected_by_extension() {
        let mut registry = Registry::builtin();
        let grammar = Configured::load(Path::new("tests/grammars/pseudo.toml")).unwrap();
        registry.register(Box::new(grammar));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry
                .for_path(Path::new("script.ps"))
                .map(|grammar| grammar.name()),
            Some("pseudo")
        );
        assert_eq!(
            registry
                .for_path(Path::new("main.dart"))
                .map(|grammar| grammar.name()),
            Some("dart")
        );
    }

    #[test]
    fn escaped_source_keeps_markup_balanced() {
        let mut code = Source::new(
            "compare.dart",
            escape_html("if (a < b) { return a; }").into_owned(),
        );
        highlight(&mut code, &Dart).unwrap();

        assert_eq!(
            code.into_content(),
            r#"<span class="code-keyword">if</span> (a &lt; b) { <span class="code-keyword">return</span> a; }"#
        );
    }
}
