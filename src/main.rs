//! transit-paths - rail network path costs and greedy route walking
//!
//! Loads a transit network (the built-in one or a TOML file), reports the
//! totals of its predefined paths and traces a nearest-neighbor walk.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use transit_paths_core::error::{ExitCode as RouteExitCode, Result, RouteError};
use transit_paths_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    finish(&cli, commands::dispatch::run(&cli, start))
}

/// Print a failed command's error and pick the process exit code
fn finish(cli: &Cli, outcome: Result<()>) -> ExitCode {
    let code = match outcome {
        Ok(()) => RouteExitCode::Success,
        Err(e) => {
            print_error(cli.format, cli.quiet, &e);
            e.exit_code()
        }
    };
    ExitCode::from(code as u8)
}

fn print_error(format: OutputFormat, quiet: bool, err: &RouteError) {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
}

/// clap prints its own errors, except when argv asked for JSON output: that
/// request has to be read from raw argv since `Cli` was never built.
fn report_parse_error(err: clap::Error) -> ExitCode {
    let informational = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    if informational || requested_format() != Some(OutputFormat::Json) {
        err.exit();
    }

    let route_error = match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => RouteError::UsageError(err.to_string()),
        _ => RouteError::Other(err.to_string()),
    };
    print_error(OutputFormat::Json, false, &route_error);
    ExitCode::from(route_error.exit_code() as u8)
}

/// Value of the last parseable `--format` in raw argv
fn requested_format() -> Option<OutputFormat> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut format = None;

    for (i, arg) in args.iter().enumerate() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.get(i + 1).map(String::as_str),
            Some(rest) => rest.strip_prefix('='),
            None => None,
        };
        if let Some(parsed) = value.and_then(|v| v.parse().ok()) {
            format = Some(parsed);
        }
    }

    format
}
