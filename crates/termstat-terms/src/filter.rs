use termstat_core::AnalyzerConfig;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Why a sub-word was not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    StopWord,
    Numeric,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::TooShort => "too short",
            Rejection::StopWord => "stop word",
            Rejection::Numeric => "numeric",
        }
    }
}

/// Outcome of running one sub-word through the filter. The normalized form
/// is always computed, even for rejected words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub normalized: String,
    pub rejection: Option<Rejection>,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }

    /// The term to count, if the word was accepted.
    pub fn into_term(self) -> Option<String> {
        match self.rejection {
            None => Some(self.normalized),
            Some(_) => None,
        }
    }
}

/// Decides which sub-words become counted terms.
///
/// Rules run in order and the first match rejects:
/// length below the effective minimum, stop word, all digits.
#[derive(Debug, Clone, Copy)]
pub struct TermFilter<'a> {
    config: &'a AnalyzerConfig,
}

impl<'a> TermFilter<'a> {
    pub fn new(config: &'a AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a AnalyzerConfig {
        self.config
    }

    pub fn check(&self, word: &str) -> Verdict {
        let normalized = normalize(word);
        let rejection = self.rejection_for(&normalized);
        Verdict {
            normalized,
            rejection,
        }
    }

    /// The normalized term, or `None` when the word is rejected.
    pub fn accept(&self, word: &str) -> Option<String> {
        self.check(word).into_term()
    }

    fn rejection_for(&self, normalized: &str) -> Option<Rejection> {
        if normalized.chars().count() < self.config.effective_min_term_length() {
            Some(Rejection::TooShort)
        } else if self.config.is_excluded(normalized) {
            Some(Rejection::StopWord)
        } else if is_numeric(normalized) {
            Some(Rejection::Numeric)
        } else {
            None
        }
    }
}

/// Lower-case a sub-word. Idempotent.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// True when every character is a decimal digit (category `Nd`). Vacuously
/// true for "", which the length rule rejects first.
fn is_numeric(s: &str) -> bool {
    s.chars()
        .all(|c| get_general_category(c) == GeneralCategory::DecimalNumber)
}
