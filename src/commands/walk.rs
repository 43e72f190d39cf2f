//! `transit-paths walk` - trace of the nearest-unvisited-neighbor walk

use tracing::debug;

use transit_paths_core::config::ReportConfig;
use transit_paths_core::error::Result;
use transit_paths_core::graph::{Graph, WalkOutcome, WalkTrace};

use crate::cli::{OutputFormat, WalkArgs};
use crate::commands::dispatch::{walk_endpoints, CommandContext};
use crate::commands::helpers::{arrow_path, banner, bracket_path, weight};

/// Execute the walk command
pub fn execute(ctx: &CommandContext, args: &WalkArgs) -> Result<()> {
    let (config, graph) = ctx.load_graph()?;
    let (start, end) = walk_endpoints(args, &config)?;
    let trace = trace(&graph, &start, &end);

    match ctx.cli.format {
        OutputFormat::Human => print!("{}", render_human(&trace, &config.report, ctx.cli.quiet)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&trace)?),
    }

    Ok(())
}

/// Run the greedy walk and log how it ended
pub fn trace(graph: &Graph, start: &str, end: &str) -> WalkTrace {
    let trace = graph.find_exact_shortest_path(start, end);
    debug!(
        reached = trace.reached(),
        steps = trace.steps.len(),
        hops = trace.path.len().saturating_sub(1),
        "walk_finished"
    );
    trace
}

/// Step-by-step trace: candidates per expansion, the path after each choice,
/// and the final path
pub fn render_human(trace: &WalkTrace, report: &ReportConfig, quiet: bool) -> String {
    let mut out = String::new();

    if !quiet {
        out.push_str(&format!(
            "\n{}\n\n",
            banner("Shortest Pathfinding Process by Train")
        ));
    }
    out.push_str(&format!(
        "Starting Pathfinding from {} to {}\n",
        trace.start, trace.end
    ));

    for step in &trace.steps {
        out.push_str(&format!("\nFrom {}, checking possible routes:\n", step.from));
        for edge in &step.candidates {
            out.push_str(&format!(
                "{} -> {} ({} {})\n",
                step.from,
                edge.destination(),
                weight(edge.distance()),
                report.distance_unit
            ));
        }

        match &step.selected {
            Some(_) => out.push_str(&format!("\nSelected Path: {}\n", bracket_path(&step.path))),
            None => out.push_str(&format!("No unvisited paths available from {}\n", step.from)),
        }
    }

    if !quiet {
        out.push_str(&format!(
            "\n{}\n",
            banner("Shortest Pathfinding Display By Train")
        ));
    }
    out.push_str(&format!("\nFinal Path: {}\n", arrow_path(&trace.path)));

    if let WalkOutcome::DeadEnd { at } = &trace.outcome {
        out.push_str(&format!(
            "No path found from {} to {} (stuck at {})\n",
            trace.start, trace.end, at
        ));
    }

    out
}
