//! CLI commands for transit-paths

pub mod check;
pub mod dispatch;
pub mod edges;
pub mod helpers;
pub mod paths;
pub mod report;
pub mod walk;
