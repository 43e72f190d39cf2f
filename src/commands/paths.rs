//! `transit-paths paths` - totals along every predefined path
//!
//! Human output streams path by path, so an invalid segment stops the report
//! after the paths already printed. JSON output is all or nothing.

use transit_paths_core::config::{NetworkConfig, PathConfig, ReportConfig};
use transit_paths_core::error::Result;
use transit_paths_core::graph::{Graph, PathDetails};

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{arrow_path, banner};

/// Execute the paths command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let (config, graph) = ctx.load_graph()?;

    match ctx.cli.format {
        OutputFormat::Human => print_human(ctx.cli, &config, &graph),
        OutputFormat::Json => {
            let details = graph.calculate_path_details(&config.path_nodes())?;
            let output = serde_json::json!({ "paths": details });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
    }
}

/// Print each path's header and totals, stopping at the first invalid segment
pub fn print_human(cli: &Cli, config: &NetworkConfig, graph: &Graph) -> Result<()> {
    if !cli.quiet {
        println!("\n{}\n", banner("Path Details Calculation By Train"));
    }

    for (i, path) in config.paths.iter().enumerate() {
        println!("{}", path_header(i + 1, path));
        let details = graph.path_details(i + 1, &path.nodes)?;
        println!("{}", render_totals(&details, &config.report));
    }

    Ok(())
}

fn path_header(index: usize, path: &PathConfig) -> String {
    match &path.name {
        Some(name) => format!("Path {} ({}): {}", index, name, arrow_path(&path.nodes)),
        None => format!("Path {}: {}", index, arrow_path(&path.nodes)),
    }
}

fn render_totals(details: &PathDetails, report: &ReportConfig) -> String {
    let totals = &details.totals;
    format!(
        "  Total Cost: {}{:.2}\n  Total Time: {:.0} {}\n  Total Distance: {:.2} {}\n",
        report.currency,
        totals.cost,
        totals.time,
        report.time_unit,
        totals.distance,
        report.distance_unit
    )
}
