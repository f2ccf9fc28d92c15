//! Termstat core domain types, configuration, and errors.

mod config;
mod error;
mod stop_words;
mod types;

pub use config::{
    AnalyzerConfig, CONFIG_FILE_NAME, ConfigFile, DEFAULT_MAX_TERMS, DEFAULT_MIN_TERM_LENGTH,
    MIN_TERM_LENGTH_FLOOR,
};
pub use error::TermstatError;
pub use stop_words::DEFAULT_STOP_WORDS;
pub use types::{Language, RankedTerm, ScanStats, SourceFile, TermReport};
