use crate::{Cli, TopArgs};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use termstat_analyze::analyze_tree;
use termstat_core::{ConfigFile, Language};
use termstat_render::write_report;
use termstat_scanner::Selection;
use tracing::debug;

pub fn run(cli: &Cli, args: &TopArgs) -> Result<()> {
    let root = args.path.as_path();
    if !root.exists() {
        anyhow::bail!("No such file or directory: {}", root.display());
    }

    let file = load_config_file(args, root)?;

    // defaults -> config file -> flags
    let mut config = args.filter.base_config();
    if let Some(file) = &file {
        config = file.apply(config);
    }
    config = args.filter.apply(config);
    if let Some(limit) = args.limit {
        config = config.with_max_terms(limit);
    }

    let selection = selection(args, file.as_ref())?;
    let respect_ignore =
        !args.no_ignore && file.as_ref().and_then(|f| f.respect_ignore).unwrap_or(true);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs.unwrap_or(0))
        .build()
        .context("Failed to start worker threads")?;

    let started = Instant::now();
    let analysis = pool.install(|| analyze_tree(root, &config, selection, respect_ignore))?;
    let elapsed = started.elapsed();

    let report = analysis.counter.report(config.max_terms());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(
        args.format.into(),
        &mut out,
        &root.display().to_string(),
        config.max_terms(),
        &report,
        &analysis.stats,
    )?;
    out.flush()?;

    if !cli.is_quiet() {
        eprintln!(
            "Analyzed {} files ({} skipped) in {:.1}s",
            analysis.stats.files_scanned,
            analysis.stats.files_skipped,
            elapsed.as_secs_f64()
        );
    }

    Ok(())
}

fn load_config_file(args: &TopArgs, root: &Path) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            Ok(Some(ConfigFile::load(path)?))
        }
        None if root.is_dir() => Ok(ConfigFile::discover(root)?),
        None => Ok(None),
    }
}

fn selection(args: &TopArgs, file: Option<&ConfigFile>) -> Result<Selection> {
    let mut languages = args.languages.clone();
    let mut extensions = args.extensions.clone();

    // Flags replace the file's lists rather than extending them.
    if let Some(file) = file {
        if languages.is_empty() {
            languages = file
                .languages
                .iter()
                .map(|name| name.parse::<Language>())
                .collect::<Result<_, _>>()?;
        }
        if extensions.is_empty() {
            extensions = file.extensions.clone();
        }
    }

    Ok(Selection::new()
        .with_languages(languages)
        .with_extensions(extensions))
}
