//! Command dispatch logic for transit-paths

use std::time::Instant;

use crate::cli::Cli;
use transit_paths_core::error::Result;

mod command;
mod commands;

pub use command::{configured_walk_endpoints, walk_endpoints, CommandContext};
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
