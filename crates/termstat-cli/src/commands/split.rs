use crate::{Cli, SplitArgs};
use anyhow::Result;
use std::io::Write;
use termstat_core::AnalyzerConfig;
use termstat_terms::{TermFilter, split_identifier};

pub fn run(_cli: &Cli, args: &SplitArgs) -> Result<()> {
    let config = args.filter.apply(args.filter.base_config());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &args.identifiers, &config)?;
    out.flush()?;
    Ok(())
}

/// One block per identifier listing each sub-word and what the filter made
/// of it.
fn render(out: &mut dyn Write, identifiers: &[String], config: &AnalyzerConfig) -> Result<()> {
    let filter = TermFilter::new(config);

    for ident in identifiers {
        writeln!(out, "{ident}")?;
        let words = split_identifier(ident);
        if words.is_empty() {
            writeln!(out, "  (no sub-words)")?;
        }
        for word in words {
            let verdict = filter.check(word);
            match verdict.rejection {
                None => writeln!(out, "  {word:<20} -> {}", verdict.normalized)?,
                Some(reason) => writeln!(out, "  {word:<20} skip ({})", reason.as_str())?,
            }
        }
    }

    Ok(())
}
