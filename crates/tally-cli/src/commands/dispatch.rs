use tally_config::TallyConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: &TallyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Clean(args) => commands::clean::handle(args, config, flags),
        Commands::Quality(args) => commands::quality::handle(args, config, flags),
        Commands::Context(args) => commands::context::handle(args, config, flags),
        Commands::Roles(args) => commands::roles::handle(args, config, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
