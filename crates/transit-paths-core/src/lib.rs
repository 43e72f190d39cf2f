//! Transit Paths Core Library
//!
//! Graph model, path aggregation and greedy route walking for the
//! transit-paths CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
