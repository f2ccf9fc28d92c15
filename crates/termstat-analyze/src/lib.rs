//! Source tree analysis: scan, extract identifiers, count terms.

mod analyzer;

pub use analyzer::{Analysis, Analyzer, SkippedFile};

use std::path::Path;
use termstat_core::AnalyzerConfig;
use termstat_scanner::{Scanner, Selection};
use tracing::info;

/// Scan `root` and analyze every selected file with the default extractor.
pub fn analyze_tree<'a>(
    root: &'a Path,
    config: &'a AnalyzerConfig,
    selection: Selection,
    respect_ignore: bool,
) -> anyhow::Result<Analysis<'a>> {
    let files = Scanner::new(root)
        .selection(selection)
        .respect_ignore(respect_ignore)
        .scan()?;
    info!("analyzing {} files under {}", files.len(), root.display());

    let analysis = Analyzer::new(root, config).analyze(&files);
    Ok(analysis)
}
