//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, WalkArgs};
use crate::commands::report;
use transit_paths_core::bail_usage;
use transit_paths_core::config::NetworkConfig;
use transit_paths_core::error::Result;
use transit_paths_core::graph::Graph;
use transit_paths_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load the network named by `--network`, or the built-in one
    pub fn load_network(&self) -> Result<NetworkConfig> {
        let config = match &self.cli.network {
            Some(path) => NetworkConfig::load(path)?,
            None => NetworkConfig::builtin()?,
        };
        debug!(elapsed = ?self.start.elapsed(), "load_network");
        Ok(config)
    }

    /// Load the network and build its graph
    pub fn load_graph(&self) -> Result<(NetworkConfig, Graph)> {
        let config = self.load_network()?;
        let build_start = Instant::now();
        let graph = config.build_graph();
        trace_time!(build_start, "build_graph", edges = graph.edge_count());
        Ok((config, graph))
    }
}

/// Resolve walk endpoints from flags, then from the network's `[walk]` table.
///
/// `None` when neither source names an endpoint.
pub fn configured_walk_endpoints(
    args: &WalkArgs,
    config: &NetworkConfig,
) -> Result<Option<(String, String)>> {
    let start = args
        .from
        .clone()
        .or_else(|| config.walk.as_ref().map(|w| w.start.clone()));
    let end = args
        .to
        .clone()
        .or_else(|| config.walk.as_ref().map(|w| w.end.clone()));

    match (start, end) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) if !start.trim().is_empty() && !end.trim().is_empty() => {
            Ok(Some((start, end)))
        }
        (None, _) | (_, None) => {
            bail_usage!("incomplete walk endpoints; pass both --from and --to")
        }
        _ => bail_usage!("walk endpoints must not be empty"),
    }
}

/// Walk endpoints that must be present
pub fn walk_endpoints(args: &WalkArgs, config: &NetworkConfig) -> Result<(String, String)> {
    match configured_walk_endpoints(args, config)? {
        Some(endpoints) => Ok(endpoints),
        None => bail_usage!("no walk endpoints configured; pass --from and --to"),
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Bare invocation runs the full report
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        report::execute(ctx, &WalkArgs::default())
    }
}
