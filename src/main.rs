use clap::value_parser;
use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::{debug, info, warn, Level};

use overlay::grammar::{Configured, Grammar, Registry};
use overlay::highlighting;
use overlay::rendering;
use overlay::source::Source;

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("overlay")
        .version(VERSION)
        .propagate_version(true)
        .about("Pattern-overlay syntax highlighting for source code.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase logging output on standard error. Repeat for more detail."),
        )
        .subcommand(
            Command::new("highlight")
                .about("Wrap keywords, literals, numbers, classes, functions and comments in markup")
                .arg(
                    Arg::new("language")
                        .short('l')
                        .long("language")
                        .action(ArgAction::Set)
                        .help("Name of the language to highlight as. By default this is chosen from the file's extension."),
                )
                .arg(
                    Arg::new("grammar")
                        .short('g')
                        .long("grammar")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(std::path::PathBuf))
                        .help("A TOML file describing the grammar to use. It is registered alongside the built-in languages and takes precedence over --language."),
                )
                .arg(
                    Arg::new("document")
                        .short('d')
                        .long("document")
                        .action(ArgAction::SetTrue)
                        .help("Emit a complete HTML document including a stylesheet, rather than just the highlighted markup."),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .action(ArgAction::Set)
                        .requires("document")
                        .help("Title of the HTML document. Defaults to the filename."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the code to highlight, or '-' to read standard input."),
                ),
        )
        .subcommand(
            Command::new("languages").about("List the languages that can be highlighted"),
        )
        .subcommand(
            Command::new("stylesheet").about("Print the default stylesheet for the highlighting class names"),
        )
        .get_matches();

    setup_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("highlight", submatches)) => {
            let filename = match submatches.get_one::<String>("filename") {
                Some(filename) => Path::new(filename),
                None => {
                    eprintln!("{}: no filename given", "error".bright_red());
                    std::process::exit(1);
                }
            };
            let language = submatches
                .get_one::<String>("language")
                .map(String::as_str);
            let grammar_file = submatches.get_one::<std::path::PathBuf>("grammar");
            let as_document = submatches.get_flag("document");
            let title = submatches
                .get_one::<String>("title")
                .cloned();

            debug!(?filename, ?language, ?grammar_file, as_document);

            let mut registry = Registry::builtin();

            let mut preferred: Option<String> = None;
            if let Some(path) = grammar_file {
                match Configured::load(path) {
                    Ok(grammar) => {
                        preferred = Some(
                            grammar
                                .name()
                                .to_string(),
                        );
                        registry.register(Box::new(grammar));
                    }
                    Err(error) => {
                        eprintln!("{}", problem::full_grammar_error(&error, path));
                        std::process::exit(1);
                    }
                }
            }

            let requested = requested_language(preferred.as_deref(), language);
            let grammar = match registry.select(requested, filename) {
                Some(grammar) => grammar,
                None => {
                    eprintln!(
                        "{}",
                        problem::concise_unknown_language(filename, requested)
                    );
                    std::process::exit(1);
                }
            };

            info!("Highlighting {} as {}", filename.display(), grammar.name());

            let mut source = match Source::open(filename) {
                Ok(source) => source,
                Err(error) => {
                    eprintln!("{}", problem::concise_loading_error(&error));
                    std::process::exit(1);
                }
            };

            if let Err(error) = highlighting::highlight(&mut source, grammar) {
                eprintln!("{}", problem::full_highlight_error(&error, filename));
                std::process::exit(1);
            }

            let markup = source.into_content();

            if as_document {
                let title = title.unwrap_or_else(|| {
                    filename
                        .to_string_lossy()
                        .to_string()
                });
                match rendering::document(&title, grammar.name(), &markup) {
                    Ok(result) => print!("{}", result),
                    Err(error) => {
                        eprintln!("{}: {}", "error".bright_red(), error);
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{}", markup);
            }
        }
        Some(("languages", _)) => {
            let registry = Registry::builtin();
            for grammar in registry.iter() {
                let extensions: Vec<String> = grammar
                    .extensions()
                    .iter()
                    .map(|extension| format!(".{}", extension))
                    .collect();
                println!("{:12} {}", grammar.name(), extensions.join(" "));
            }
        }
        Some(("stylesheet", _)) => {
            print!("{}", rendering::stylesheet());
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: overlay [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// The language to highlight as: the one a grammar file declares, then the
/// one named on the command line. Neither means going by file extension.
fn requested_language<'a>(
    grammar_file: Option<&'a str>,
    language: Option<&'a str>,
) -> Option<&'a str> {
    if let (Some(declared), Some(named)) = (grammar_file, language) {
        if !declared.eq_ignore_ascii_case(named) {
            warn!(
                "Using grammar file's language {} rather than --language {}",
                declared, named
            );
        }
    }
    grammar_file.or(language)
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
