#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use overlay::grammar::Registry;
    use overlay::highlighting::highlight;
    use overlay::source::{self, Source};

    /// Golden test for the highlight command
    ///
    /// Every .dart file in tests/golden/ is loaded and highlighted the same
    /// way the `highlight` command does, and the result compared with the
    /// .html file of the same name. A mismatch means either the grammar or
    /// engine changed behaviour (a bug, or a deliberate change in which case
    /// the expected output needs regenerating).

    /// Simple diff function to show line-by-line differences
    fn show_diff(expected: &str, actual: &str, file_path: &Path) {
        let expected_lines: Vec<&str> = expected
            .lines()
            .collect();
        let actual_lines: Vec<&str> = actual
            .lines()
            .collect();

        let max_lines = expected_lines
            .len()
            .max(actual_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Expected");
        println!("+++ Highlighted");

        for i in 0..max_lines {
            let expected_line = expected_lines
                .get(i)
                .unwrap_or(&"");
            let actual_line = actual_lines
                .get(i)
                .unwrap_or(&"");

            if expected_line != actual_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", expected_line);
                println!("+ {}", actual_line);
            }
        }
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("dart")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .dart files found in golden directory");

        let registry = Registry::builtin();
        let mut failures = Vec::new();

        for file in &files {
            let grammar = registry
                .for_path(file)
                .unwrap_or_else(|| panic!("No grammar for {:?}", file));

            let mut code = Source::open(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            highlight(&mut code, grammar)
                .unwrap_or_else(|e| panic!("Failed to highlight {:?}: {}", file, e));

            let actual = code.into_content();

            let expected_path = file.with_extension("html");
            let expected = source::load(&expected_path)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", expected_path, e));

            if actual != expected {
                show_diff(&expected, &actual, file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Highlighted output differs for {} file{}",
                failures.len(),
                if failures.len() == 1 { "" } else { "s" }
            );
        }
    }
}
