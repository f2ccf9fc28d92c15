use serde::Serialize;
use std::io::Write;
use termstat_core::{ScanStats, TermReport};

/// Writes the whole report as one pretty-printed JSON document.
pub struct JsonWriter {
    root: String,
}

#[derive(Serialize)]
struct Document<'a> {
    root: &'a str,
    #[serde(flatten)]
    report: &'a TermReport,
    stats: &'a ScanStats,
}

impl JsonWriter {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.to_string(),
        }
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
        let doc = Document {
            root: &self.root,
            report,
            stats,
        };
        serde_json::to_writer_pretty(&mut *writer, &doc)?;
        writeln!(writer)?;
        Ok(())
    }
}
