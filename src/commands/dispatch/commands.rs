//! Command implementations for all transit-paths commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{check, edges, paths, report, walk};
use transit_paths_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Report(args) => report::execute(ctx, args),
            Commands::Paths => paths::execute(ctx),
            Commands::Walk(args) => walk::execute(ctx, args),
            Commands::Edges => edges::execute(ctx),
            Commands::Check => check::execute(ctx),
        }
    }
}
