use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use termstat_core::{AnalyzerConfig, Language};
use termstat_render::OutputFormat;
use tracing_subscriber::EnvFilter;

mod commands;

/// Termstat: find the domain vocabulary of a codebase from its identifiers.
#[derive(Parser, Debug)]
#[command(name = "termstat", version, about)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the most frequent terms across a source tree
    Top(TopArgs),

    /// Show how identifiers break down into terms
    Split(SplitArgs),
}

/// Term acceptance options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Extra stop words (repeatable, or comma separated)
    #[arg(short = 'x', long = "exclude", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Minimum term length (never below 3)
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Start from an empty stop-word list
    #[arg(long)]
    pub no_default_excludes: bool,
}

impl FilterArgs {
    /// Build the analyzer config, layering these flags over `base`.
    pub fn apply(&self, base: AnalyzerConfig) -> AnalyzerConfig {
        let mut config = base;
        if let Some(len) = self.min_length {
            config = config.with_min_term_length(len);
        }
        config.add_exclude_terms(&self.exclude);
        config
    }

    pub fn base_config(&self) -> AnalyzerConfig {
        if self.no_default_excludes {
            AnalyzerConfig::without_stop_words()
        } else {
            AnalyzerConfig::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct TopArgs {
    /// Directory (or single file) to analyze
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Number of terms to report
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only analyze these languages (repeatable, or comma separated)
    #[arg(long = "lang", value_delimiter = ',')]
    pub languages: Vec<Language>,

    /// Only analyze files with these suffixes (repeatable, or comma separated)
    #[arg(long = "ext", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Do not honour .gitignore and .ignore files
    #[arg(long)]
    pub no_ignore: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Worker threads (defaults to one per core)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Config file (defaults to termstat.toml in the analyzed directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Identifiers to decompose
    #[arg(required = true)]
    pub identifiers: Vec<String>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Jsonl,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::Jsonl => OutputFormat::Jsonl,
        }
    }
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Default log level; `RUST_LOG` overrides it.
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match &cli.command {
        Commands::Top(args) => commands::top::run(&cli, args),
        Commands::Split(args) => commands::split::run(&cli, args),
    }
}
