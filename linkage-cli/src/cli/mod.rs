//! Command-line interface orchestration for the linkage analyses.
//!
//! The `run` command reads `x,y,z` lines from a text file, runs the budgeted
//! score and the bridge search, and renders both results.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};
