use tally_config::TallyConfig;

use crate::bootstrap::clean_options;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::SnapshotArgs;
use crate::commands::shared::snapshot::load_cleaned;
use crate::output::output;

/// Handle `tally quality`.
pub fn handle(args: &SnapshotArgs, config: &TallyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = load_cleaned(&args.snapshot, &clean_options(config))?;
    output(&board.quality, flags.format)
}
