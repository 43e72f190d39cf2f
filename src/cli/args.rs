use clap::Args;

/// Greedy walk endpoints; each falls back to the network's `[walk]` table
#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    /// Start station
    #[arg(long)]
    pub from: Option<String>,

    /// End station
    #[arg(long)]
    pub to: Option<String>,
}
