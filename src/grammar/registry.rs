//! Selecting a grammar by language name or file extension.

use std::path::Path;

use tracing::debug;

use super::{Dart, Grammar};

/// The set of grammars available for highlighting. Later registrations
/// replace earlier ones of the same name, so a grammar file can override a
/// built-in language.
pub struct Registry {
    grammars: Vec<Box<dyn Grammar>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            grammars: Vec::new(),
        }
    }

    /// A registry holding the grammars compiled into the crate.
    pub fn builtin() -> Registry {
        let mut registry = Registry::new();
        registry.register(Box::new(Dart));
        registry
    }

    pub fn register(&mut self, grammar: Box<dyn Grammar>) {
        let name = grammar
            .name()
            .to_string();

        let before = self
            .grammars
            .len();
        self.grammars
            .retain(|existing| existing.name() != name);

        if self
            .grammars
            .len()
            < before
        {
            debug!("Replacing grammar {}", name);
        } else {
            debug!("Registering grammar {}", name);
        }

        self.grammars
            .push(grammar);
    }

    pub fn by_name(&self, name: &str) -> Option<&dyn Grammar> {
        self.grammars
            .iter()
            .rev()
            .find(|grammar| {
                grammar
                    .name()
                    .eq_ignore_ascii_case(name)
            })
            .map(|grammar| grammar.as_ref())
    }

    pub fn by_extension(&self, extension: &str) -> Option<&dyn Grammar> {
        let extension = extension.trim_start_matches('.');

        self.grammars
            .iter()
            .rev()
            .find(|grammar| {
                grammar
                    .extensions()
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(extension))
            })
            .map(|grammar| grammar.as_ref())
    }

    /// Choose a grammar from the extension of the given filename.
    pub fn for_path(&self, filename: &Path) -> Option<&dyn Grammar> {
        let extension = filename
            .extension()
            .and_then(|s| s.to_str())?;

        self.by_extension(extension)
    }

    /// Choose the grammar named by `requested`, or when no name is given,
    /// the one for the extension of `filename`. A name that is given but
    /// unknown is not a reason to fall back on the extension.
    pub fn select(&self, requested: Option<&str>, filename: &Path) -> Option<&dyn Grammar> {
        match requested {
            Some(name) => self.by_name(name),
            None => self.for_path(filename),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Grammar> {
        self.grammars
            .iter()
            .map(|grammar| grammar.as_ref())
    }

    pub fn len(&self) -> usize {
        self.grammars
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars
            .is_empty()
    }
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::builtin()
    }
}
