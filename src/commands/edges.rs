//! `transit-paths edges` - adjacency listing
//!
//! Sources are sorted by name; each source's edges keep insertion order.

use serde::Serialize;

use transit_paths_core::config::ReportConfig;
use transit_paths_core::error::Result;
use transit_paths_core::graph::Graph;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::weight;

#[derive(Debug, Serialize)]
struct EdgeRow<'a> {
    from: &'a str,
    to: &'a str,
    cost: f64,
    time: f64,
    distance: f64,
}

/// Execute the edges command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let (config, graph) = ctx.load_graph()?;

    match ctx.cli.format {
        OutputFormat::Human => print!("{}", render_human(&graph, &config.report)),
        OutputFormat::Json => {
            let output = serde_json::json!({ "edges": rows(&graph) });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn rows(graph: &Graph) -> Vec<EdgeRow<'_>> {
    graph
        .sources()
        .into_iter()
        .flat_map(|from| {
            graph.edges(from).iter().map(move |edge| EdgeRow {
                from,
                to: edge.destination(),
                cost: edge.cost(),
                time: edge.time(),
                distance: edge.distance(),
            })
        })
        .collect()
}

fn render_human(graph: &Graph, report: &ReportConfig) -> String {
    let mut out = String::new();
    for source in graph.sources() {
        out.push_str(source);
        out.push('\n');
        for edge in graph.edges(source) {
            out.push_str(&format!(
                "  -> {} (cost {}{}, time {} {}, distance {} {})\n",
                edge.destination(),
                report.currency,
                weight(edge.cost()),
                weight(edge.time()),
                report.time_unit,
                weight(edge.distance()),
                report.distance_unit
            ));
        }
    }
    out
}
