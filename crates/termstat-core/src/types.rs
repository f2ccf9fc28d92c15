use crate::TermstatError;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Source languages whose identifiers can be discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    Go,
    Python,
    JavaScript,
    TypeScript,
    Tsx,
    Java,
    Ruby,
    C,
    Cpp,
    Other,
}

impl Language {
    /// Every language with identifier support, in display order.
    pub const SUPPORTED: &'static [Language] = &[
        Language::Go,
        Language::Rust,
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Tsx,
        Language::Java,
        Language::Ruby,
        Language::C,
        Language::Cpp,
    ];

    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "rs" => Language::Rust,
            "go" => Language::Go,
            "py" | "pyi" => Language::Python,
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "mts" | "cts" => Language::TypeScript,
            "tsx" => Language::Tsx,
            "java" => Language::Java,
            "rb" => Language::Ruby,
            "c" | "h" => Language::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Language::Cpp,
            _ => Language::Other,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Language::from_extension)
            .unwrap_or(Language::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::Java => "java",
            Language::Ruby => "ruby",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Other => "other",
        }
    }

    /// Whether identifiers can be extracted from files of this language.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Language::Other)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = TermstatError;

    /// Accepts the display name (`"rust"`) or a file extension (`"rs"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(lang) = Language::SUPPORTED.iter().find(|l| l.as_str() == lower) {
            return Ok(*lang);
        }
        match Language::from_extension(&lower) {
            Language::Other => Err(TermstatError::Config(format!("unknown language: {s}"))),
            lang => Ok(lang),
        }
    }
}

/// A source file selected for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the scan root, `/`-separated on every platform.
    pub path: String,
    pub size: u64,
    pub language: Language,
}

/// One line of the top-N report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTerm {
    pub word: String,
    pub count: u64,
}

impl RankedTerm {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// The ranked vocabulary of a source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TermReport {
    /// Highest-ranked terms: count descending, then word ascending.
    pub terms: Vec<RankedTerm>,
    /// Number of distinct accepted terms seen, before truncation.
    pub distinct_terms: usize,
    /// Sum of all term counts, before truncation.
    pub total_occurrences: u64,
}

impl TermReport {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True when the ranked list omits some accepted terms.
    pub fn is_truncated(&self) -> bool {
        self.terms.len() < self.distinct_terms
    }
}

/// Counters describing one source-tree scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub identifiers: u64,
}
