//! Reading code to be highlighted from files or standard input.

use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::LoadingError;
use crate::highlighting::{escape_html, Content};

/// Read a file and return an owned String. A filename of `-` reads standard
/// input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// A named buffer of code: the container the highlighter rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    filename: PathBuf,
    content: String,
}

impl Source {
    pub fn new(filename: impl Into<PathBuf>, content: impl Into<String>) -> Source {
        Source {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Load code from a file, escaping it as HTML text so that `<`, `>`
    /// and `&` in the code are not later mistaken for markup.
    pub fn open(filename: &Path) -> Result<Source, LoadingError<'_>> {
        let content = load(filename)?;
        let content = escape_html(&content).into_owned();

        debug!("Loaded {} bytes from {}", content.len(), filename.display());

        Ok(Source {
            filename: filename.to_path_buf(),
            content,
        })
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl Content for Source {
    fn content(&self) -> &str {
        &self.content
    }

    fn set_content(&mut self, content: String) {
        self.content = content;
    }
}
