//! Analyzer configuration and the optional `termstat.toml` file layer.

use crate::stop_words::DEFAULT_STOP_WORDS;
use crate::TermstatError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const DEFAULT_MIN_TERM_LENGTH: usize = 3;
pub const DEFAULT_MAX_TERMS: usize = 50;

/// Terms shorter than this are rejected whatever `min_term_length` says.
pub const MIN_TERM_LENGTH_FLOOR: usize = 3;

/// File name looked up at the scan root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "termstat.toml";

/// Stop words, length policy, and report size for one analysis run.
///
/// Built once during setup. Counters borrow it immutably, so exclusions can
/// only be added before any identifier is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    min_term_length: usize,
    exclude_terms: HashSet<String>,
    max_terms: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
            exclude_terms: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            max_terms: DEFAULT_MAX_TERMS,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same policy as the default, but with no stop words at all.
    pub fn without_stop_words() -> Self {
        Self {
            exclude_terms: HashSet::new(),
            ..Self::default()
        }
    }

    pub fn with_min_term_length(mut self, len: usize) -> Self {
        self.min_term_length = len;
        self
    }

    pub fn with_max_terms(mut self, max: usize) -> Self {
        self.max_terms = max;
        self
    }

    pub fn with_exclude_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_exclude_terms(terms);
        self
    }

    /// Merge extra stop words into the set. Each is lower-cased first; blank
    /// entries are ignored. Never removes anything.
    pub fn add_exclude_terms<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            let term = term.as_ref().trim();
            if !term.is_empty() {
                self.exclude_terms.insert(term.to_lowercase());
            }
        }
    }

    pub fn min_term_length(&self) -> usize {
        self.min_term_length
    }

    /// The length a term must reach to be counted: the configured minimum,
    /// but never below [`MIN_TERM_LENGTH_FLOOR`].
    pub fn effective_min_term_length(&self) -> usize {
        self.min_term_length.max(MIN_TERM_LENGTH_FLOOR)
    }

    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    pub fn exclude_terms(&self) -> &HashSet<String> {
        &self.exclude_terms
    }

    /// Case-insensitive stop-word lookup.
    pub fn is_excluded(&self, term: &str) -> bool {
        if term.chars().any(char::is_uppercase) {
            self.exclude_terms.contains(&term.to_lowercase())
        } else {
            self.exclude_terms.contains(term)
        }
    }
}

/// Settings read from a TOML file. Every key is optional.
///
/// ```toml
/// limit = 30
/// min_length = 4
/// exclude = ["handler", "util"]
/// extensions = ["go"]
/// languages = ["rust"]
/// respect_ignore = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub limit: Option<usize>,
    pub min_length: Option<usize>,
    pub exclude: Vec<String>,
    pub extensions: Vec<String>,
    pub languages: Vec<String>,
    pub respect_ignore: Option<bool>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, TermstatError> {
        toml::from_str(text).map_err(|e| TermstatError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, TermstatError> {
        let text = fs::read_to_string(path)
            .map_err(|e| TermstatError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&text)
            .map_err(|e| TermstatError::Config(format!("{}: {e}", path.display())))
    }

    /// Load `termstat.toml` from `root` if present.
    pub fn discover(root: &Path) -> Result<Option<Self>, TermstatError> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Layer this file's analyzer settings on top of `config`.
    pub fn apply(&self, config: AnalyzerConfig) -> AnalyzerConfig {
        let mut config = config;
        if let Some(limit) = self.limit {
            config = config.with_max_terms(limit);
        }
        if let Some(len) = self.min_length {
            config = config.with_min_term_length(len);
        }
        config.add_exclude_terms(&self.exclude);
        config
    }
}
