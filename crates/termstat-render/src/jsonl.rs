use serde::Serialize;
use std::io::Write;
use termstat_core::{ScanStats, TermReport};

pub const JSONL_VERSION: &str = "1";

/// Writes a term report as JSONL: a header line, one line per term, a footer.
pub struct JsonlWriter {
    root: String,
    limit: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header<'a> {
    version: &'a str,
    root: &'a str,
    limit: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TermEntry<'a> {
    rank: usize,
    term: &'a str,
    count: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    distinct_terms: usize,
    total_occurrences: u64,
    files_scanned: usize,
    files_skipped: usize,
}

impl JsonlWriter {
    pub fn new(root: &str, limit: usize) -> Self {
        Self {
            root: root.to_string(),
            limit,
        }
    }

    /// Render the report as a JSONL string.
    pub fn render(&self, report: &TermReport, stats: &ScanStats) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, report, stats)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write JSONL output to a writer.
    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        report: &TermReport,
        stats: &ScanStats,
    ) -> anyhow::Result<()> {
        let header = Header {
            version: JSONL_VERSION,
            root: &self.root,
            limit: self.limit,
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        for (i, term) in report.terms.iter().enumerate() {
            let entry = TermEntry {
                rank: i + 1,
                term: &term.word,
                count: term.count,
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
        }

        let footer = Footer {
            distinct_terms: report.distinct_terms,
            total_occurrences: report.total_occurrences,
            files_scanned: stats.files_scanned,
            files_skipped: stats.files_skipped,
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}
