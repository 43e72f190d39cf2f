//! CLI argument parsing for transit-paths
//!
//! Global flags: --network, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::WalkArgs;
pub use transit_paths_core::format::OutputFormat;

/// transit-paths - path costs and greedy route walking over a rail network
#[derive(Parser, Debug)]
#[command(name = "transit-paths")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network file (TOML); the built-in network is used when omitted
    #[arg(long, global = true, env = "TRANSIT_PATHS_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress banners and error text
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Path totals followed by the greedy walk (default)
    Report(WalkArgs),

    /// Cost, time and distance totals of every predefined path
    Paths,

    /// Nearest-unvisited-neighbor walk between two stations
    Walk(WalkArgs),

    /// List every edge grouped by source station
    Edges,

    /// Validate the network and summarize its size
    Check,
}
