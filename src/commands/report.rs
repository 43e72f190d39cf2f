//! `transit-paths report` - path totals followed by the greedy walk, which is
//! skipped when neither flags nor the network name its endpoints
//!
//! This is also what a bare `transit-paths` invocation runs.

use transit_paths_core::error::Result;

use crate::cli::{OutputFormat, WalkArgs};
use crate::commands::dispatch::{configured_walk_endpoints, CommandContext};
use crate::commands::{paths, walk};

/// Execute the report: path totals first, then the walk when endpoints exist
pub fn execute(ctx: &CommandContext, args: &WalkArgs) -> Result<()> {
    let (config, graph) = ctx.load_graph()?;

    match ctx.cli.format {
        OutputFormat::Human => {
            paths::print_human(ctx.cli, &config, &graph)?;
            match configured_walk_endpoints(args, &config)? {
                Some((start, end)) => {
                    let trace = walk::trace(&graph, &start, &end);
                    print!("{}", walk::render_human(&trace, &config.report, ctx.cli.quiet));
                }
                None => println!("\nNo walk endpoints configured; skipping the greedy walk"),
            }
        }
        OutputFormat::Json => {
            let details = graph.calculate_path_details(&config.path_nodes())?;
            let trace = configured_walk_endpoints(args, &config)?
                .map(|(start, end)| walk::trace(&graph, &start, &end));
            let output = serde_json::json!({ "paths": details, "walk": trace });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
