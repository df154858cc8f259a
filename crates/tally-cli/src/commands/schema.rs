use tally_core::board::SnapshotDocument;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `tally schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(SnapshotDocument);
    output(&schema, flags.format)
}
