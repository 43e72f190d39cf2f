//! `transit-paths check` - validate a network and summarize it
//!
//! Loading already validates weights and names; this also confirms that
//! every predefined path resolves edge by edge.

use serde::Serialize;

use transit_paths_core::config::{NetworkConfig, WalkConfig};
use transit_paths_core::error::Result;
use transit_paths_core::graph::Graph;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

#[derive(Debug, Serialize)]
struct NetworkSummary<'a> {
    stations: usize,
    edges: usize,
    duplicate_edges: usize,
    paths: usize,
    walk: Option<&'a WalkConfig>,
}

impl<'a> NetworkSummary<'a> {
    fn new(config: &'a NetworkConfig, graph: &Graph) -> Self {
        NetworkSummary {
            stations: graph.node_count(),
            edges: graph.edge_count(),
            duplicate_edges: config.edges.len() - graph.edge_count(),
            paths: config.paths.len(),
            walk: config.walk.as_ref(),
        }
    }
}

/// Execute the check command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let (config, graph) = ctx.load_graph()?;
    graph.calculate_path_details(&config.path_nodes())?;

    let summary = NetworkSummary::new(&config, &graph);
    match ctx.cli.format {
        OutputFormat::Human => print!("{}", render_human(&summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn render_human(summary: &NetworkSummary<'_>) -> String {
    let mut out = format!(
        "Network OK: {} stations, {} edges ({} duplicates collapsed), {} paths\n",
        summary.stations, summary.edges, summary.duplicate_edges, summary.paths
    );
    match summary.walk {
        Some(walk) => out.push_str(&format!("Walk: {} -> {}\n", walk.start, walk.end)),
        None => out.push_str("Walk: not configured\n"),
    }
    out
}
