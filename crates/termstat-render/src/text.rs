use std::io::Write;
use termstat_core::{ScanStats, TermReport};

const TERM_WIDTH: usize = 20;

/// Human-readable table of the top terms followed by run statistics.
pub struct TextWriter {
    limit: usize,
}

impl TextWriter {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn render(&self, report: &TermReport, stats: &ScanStats) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, report, stats)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        report: &TermReport,
        stats: &ScanStats,
    ) -> anyhow::Result<()> {
        writeln!(writer)?;
        writeln!(
            writer,
            "Top {} domain-specific terms in the codebase:",
            self.limit
        )?;
        writeln!(writer, "{:<width$} Count", "Term", width = TERM_WIDTH)?;
        writeln!(writer, "{}", "-".repeat(TERM_WIDTH + 6))?;
        for term in &report.terms {
            writeln!(
                writer,
                "{:<width$} {}",
                term.word,
                term.count,
                width = TERM_WIDTH
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Analysis Statistics:")?;
        writeln!(
            writer,
            "Files analyzed: {} ({} skipped)",
            stats.files_scanned, stats.files_skipped
        )?;
        writeln!(writer, "Identifiers seen: {}", stats.identifiers)?;
        writeln!(
            writer,
            "Total unique terms (excluding common terms): {}",
            report.distinct_terms
        )?;
        Ok(())
    }
}
