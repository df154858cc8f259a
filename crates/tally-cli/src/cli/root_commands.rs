use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Clean a board snapshot and print the cleaned records.
    Clean(SnapshotArgs),
    /// Print the data-quality report for a board snapshot.
    Quality(SnapshotArgs),
    /// Render the context document for a board snapshot.
    Context(ContextArgs),
    /// Show detected column roles and board kind.
    Roles(SnapshotArgs),
    /// Print the JSON Schema of the snapshot input.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct SnapshotArgs {
    /// Snapshot JSON file, or `-` for stdin.
    pub snapshot: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ContextArgs {
    /// Snapshot JSON file, or `-` for stdin.
    pub snapshot: PathBuf,

    /// Maximum rows in the detail table (overrides --limit and config).
    #[arg(long)]
    pub top_n: Option<usize>,
}
