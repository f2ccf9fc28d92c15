use rayon::prelude::*;
use std::fs;
use std::path::Path;
use termstat_core::{AnalyzerConfig, ScanStats, SourceFile, TermstatError};
use termstat_scanner::source_path;
use termstat_terms::TermCounter;
use termstat_treesit::{IdentifierExtractor, TreeSitterExtractor};
use tracing::{debug, warn};

/// A file that contributed nothing because it could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Counts and bookkeeping from one analysis run.
#[derive(Debug)]
pub struct Analysis<'a> {
    pub counter: TermCounter<'a>,
    pub stats: ScanStats,
    /// Sorted by path.
    pub skipped: Vec<SkippedFile>,
}

impl<'a> Analysis<'a> {
    fn empty(config: &'a AnalyzerConfig) -> Self {
        Self {
            counter: TermCounter::new(config),
            stats: ScanStats::default(),
            skipped: Vec::new(),
        }
    }

    fn merge(mut self, other: Analysis<'_>) -> Self {
        self.counter.merge(other.counter);
        self.stats.files_scanned += other.stats.files_scanned;
        self.stats.files_skipped += other.stats.files_skipped;
        self.stats.identifiers += other.stats.identifiers;
        self.skipped.extend(other.skipped);
        self
    }
}

/// Runs identifier discovery and term counting over a set of files.
///
/// Files are processed on the rayon pool. Each worker folds into its own
/// counter and the counters are merged at the end, so no lock guards the
/// term map and the totals do not depend on scheduling.
pub struct Analyzer<'a, E = TreeSitterExtractor> {
    root: &'a Path,
    config: &'a AnalyzerConfig,
    extractor: E,
}

impl<'a> Analyzer<'a, TreeSitterExtractor> {
    pub fn new(root: &'a Path, config: &'a AnalyzerConfig) -> Self {
        Self::with_extractor(root, config, TreeSitterExtractor::new())
    }
}

impl<'a, E> Analyzer<'a, E>
where
    E: IdentifierExtractor + Sync,
{
    pub fn with_extractor(root: &'a Path, config: &'a AnalyzerConfig, extractor: E) -> Self {
        Self {
            root,
            config,
            extractor,
        }
    }

    /// Analyze every file. Unreadable or unparsable files are logged,
    /// recorded in `skipped`, and otherwise ignored.
    pub fn analyze(&self, files: &[SourceFile]) -> Analysis<'a> {
        let config = self.config;
        let mut analysis = files
            .par_iter()
            .fold(
                || Analysis::empty(config),
                |mut acc, file| {
                    match self.analyze_file(file, &mut acc.counter) {
                        Ok(identifiers) => {
                            acc.stats.files_scanned += 1;
                            acc.stats.identifiers += identifiers;
                        }
                        Err(err) => {
                            warn!("skipping {}: {err}", file.path);
                            acc.stats.files_skipped += 1;
                            acc.skipped.push(SkippedFile {
                                path: file.path.clone(),
                                reason: err.to_string(),
                            });
                        }
                    }
                    acc
                },
            )
            .reduce(|| Analysis::empty(config), Analysis::merge);

        analysis.skipped.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(
            "analyzed {} files ({} skipped), {} distinct terms",
            analysis.stats.files_scanned,
            analysis.stats.files_skipped,
            analysis.counter.distinct_terms()
        );
        analysis
    }

    /// Feed one file's identifiers into `counter`. Returns the number of
    /// identifiers found. On error the counter is left untouched.
    pub fn analyze_file(
        &self,
        file: &SourceFile,
        counter: &mut TermCounter<'_>,
    ) -> Result<u64, TermstatError> {
        let path = source_path(self.root, file);
        let content = fs::read_to_string(&path)
            .map_err(|e| TermstatError::Io(format!("{}: {e}", path.display())))?;
        let identifiers = self.extractor.extract(&content, file.language)?;

        for ident in &identifiers {
            counter.process_identifier(ident);
        }
        debug!("{}: {} identifiers", file.path, identifiers.len());
        Ok(identifiers.len() as u64)
    }
}
