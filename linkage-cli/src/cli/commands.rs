//! Command implementations and argument parsing for the linkage CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use linkage_core::{
    DEFAULT_PAIR_BUDGET, DEFAULT_TOP_CLUSTERS, LinkageBuilder, LinkageError, LinkageReport,
    PointSource,
};
use linkage_providers_text::{TextPointSource, TextProviderError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "linkage",
    about = "Cluster 3-D points by nearest-pair linkage and report the score and bridge edge."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run both analyses over a file of `x,y,z` lines.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a text file with one `x,y,z` point per line.
    pub path: PathBuf,

    /// Number of closest pairs consumed before scoring.
    #[arg(
        long = "pairs",
        default_value_t = DEFAULT_PAIR_BUDGET,
        value_parser = clap::value_parser!(usize),
    )]
    pub pairs: usize,

    /// Number of largest clusters multiplied into the score.
    #[arg(
        long = "top",
        default_value_t = DEFAULT_TOP_CLUSTERS,
        value_parser = clap::value_parser!(usize),
    )]
    pub top: usize,

    /// Override name for the point source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Text ingestion failed.
    #[error(transparent)]
    Text(#[from] TextProviderError),
    /// Core analysis failed.
    #[error(transparent)]
    Core(#[from] LinkageError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the point source.
    pub data_source: String,
    /// Score and bridge produced by the analyses.
    pub report: LinkageReport,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading the input or running the analyses fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use linkage_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0,0,0\n1,0,0\n10,0,0\n12,0,0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         pairs: 1,
///         top: 2,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.score(), 2);
/// assert_eq!(summary.report.bridge().x_product(), 10);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = %command.path.display(), pairs = command.pairs, top = command.top),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        pairs,
        top,
        name,
    } = command;
    let linkage = LinkageBuilder::new()
        .with_pair_budget(pairs)
        .with_top_clusters(top)
        .build()?;

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_text_reader(&path)?;
    let source = TextPointSource::try_from_reader(chosen_name, reader)?;
    let report = linkage.run(&source)?;

    info!(
        data_source = source.name(),
        score = report.score(),
        x_product = report.bridge().x_product(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: source.name().to_owned(),
        report,
    })
}

#[instrument(name = "cli.open_text_reader", err, fields(path = %path.display()))]
pub(super) fn open_text_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "points".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use linkage_cli::cli::{ExecutionSummary, render_summary};
/// # use linkage_core::{LinkageBuilder, Point};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let points = [Point::new(0, 0, 0), Point::new(1, 0, 0), Point::new(5, 0, 0)];
/// let report = LinkageBuilder::new().build()?.run(&points[..])?;
/// let summary = ExecutionSummary { data_source: "demo".into(), report };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("bridge x-product: 5"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let report = &summary.report;
    let stats = report.statistics();
    let bridge = report.bridge();
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "points: {}", report.point_count())?;
    writeln!(
        writer,
        "clusters: {} (unconnected: {})",
        stats.formed_count(),
        stats.len() - stats.formed_count()
    )?;
    writeln!(writer, "score: {}", report.score())?;
    writeln!(
        writer,
        "bridge: {} -> {} (after {} pairs)",
        bridge.source(),
        bridge.target(),
        bridge.budget()
    )?;
    writeln!(writer, "bridge x-product: {}", bridge.x_product())?;
    Ok(())
}
