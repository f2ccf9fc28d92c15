use std::collections::BTreeSet;
use std::path::Path;
use termstat_core::Language;

/// Which files a scan keeps.
///
/// Only languages with identifier support are ever selected. Empty
/// extension and language sets mean "no further restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    extensions: BTreeSet<String>,
    languages: BTreeSet<Language>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only files with one of these suffixes. A leading dot is optional.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extensions {
            let ext = ext.as_ref().trim().trim_start_matches('.');
            if !ext.is_empty() {
                self.extensions.insert(ext.to_ascii_lowercase());
            }
        }
        self
    }

    pub fn with_languages<I>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = Language>,
    {
        self.languages.extend(languages);
        self
    }

    pub fn accepts(&self, path: &Path, language: Language) -> bool {
        if !language.is_supported() {
            return false;
        }
        if !self.languages.is_empty() && !self.languages.contains(&language) {
            return false;
        }
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.contains(&e.to_ascii_lowercase()))
    }
}
