//! Typography checker CLI.
//!
//! Reports ASCII typography that is better rendered as Unicode, with a
//! line diff of the suggested corrections. Exits non-zero if any input had
//! issues.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use typography::{report, RuleSet, TextSource};

/// Identify ASCII typography that could be better rendered as Unicode.
///
/// Reads standard input when no files are given.
#[derive(Parser)]
#[command(name = "typography")]
#[command(version, long_about = None)]
struct Cli {
    /// Input file(s)
    #[arg(value_name = "FILE")]
    infiles: Vec<PathBuf>,

    /// Print the diff without colors
    #[arg(long)]
    no_color: bool,

    /// Show which rules fired, and enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Check command handler.
struct CheckHandler<'a> {
    rules: &'a RuleSet,
    color: bool,
    verbose: bool,
}

impl CheckHandler<'_> {
    fn new(color: bool, verbose: bool) -> Self {
        Self {
            rules: RuleSet::standard(),
            color,
            verbose,
        }
    }

    /// Checks one source and prints its report. Returns its issue count.
    fn check(&self, source: &TextSource, out: &mut impl Write) -> Result<usize> {
        let before = source
            .read_to_string()
            .with_context(|| format!("Failed to read {}", source.name()))?;

        let correction = self.rules.apply_count_issues(&before);
        tracing::debug!(source = %source.name(), issues = correction.issue_count, "checked");

        write!(
            out,
            "{}",
            report::render(&source.name(), &before, &correction, self.color)
        )?;

        if self.verbose {
            for hit in &correction.hits {
                writeln!(out, "  [{}] {}: {}", hit.category, hit.rule, hit.count)?;
            }
        }

        Ok(correction.issue_count)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("TYPOGRAPHY_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<bool> {
    // Fail before reading anything if an input is missing
    let sources = TextSource::collect(&cli.infiles)?;
    let handler = CheckHandler::new(!cli.no_color, cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut issue_found = false;

    for source in &sources {
        let count = handler.check(source, &mut out)?;
        issue_found = issue_found || count > 0;
    }

    Ok(issue_found)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if run(&cli)? {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
