//! Report rendering: text table, JSON, and JSONL.

mod json;
mod jsonl;
mod text;

pub use json::JsonWriter;
pub use jsonl::{JSONL_VERSION, JsonlWriter};
pub use text::TextWriter;

use std::io::Write;
use termstat_core::{ScanStats, TermReport};

/// Output formats for a term report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

/// Write `report` to `writer` in the requested format.
pub fn write_report(
    format: OutputFormat,
    writer: &mut dyn Write,
    root: &str,
    limit: usize,
    report: &TermReport,
    stats: &ScanStats,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => TextWriter::new(limit).write_to(writer, report, stats),
        OutputFormat::Json => JsonWriter::new(root).write_to(writer, report, stats),
        OutputFormat::Jsonl => JsonlWriter::new(root, limit).write_to(writer, report, stats),
    }
}
