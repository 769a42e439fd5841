//! CLI entry point for the linkage analyses.
//!
//! Parses command-line arguments with clap, runs the score and bridge
//! analyses, renders the summary to stdout, and maps errors to exit codes.
//! Logging is initialised first so every later step can emit structured
//! diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use linkage_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the summary, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, point_source_code) = match err.downcast_ref::<CliError>() {
            Some(CliError::Core(core)) => (Some(core.code()), core.point_source_code()),
            _ => (None, None),
        };

        error!(
            error = %err,
            code = code.map(|code| field::display(code.as_str())),
            point_source_code = point_source_code.map(|code| field::display(code.as_str())),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
