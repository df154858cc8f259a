use tally_config::TallyConfig;
use tally_core::responses::ContextResponse;
use tally_pipeline::summarize;

use crate::bootstrap::{clean_options, render_options};
use crate::cli::root_commands::ContextArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::snapshot::load_cleaned;
use crate::output::output;

/// Handle `tally context`.
///
/// Table mode prints the document as plain text; the structured modes wrap it
/// with the board name and detected kind.
pub fn handle(args: &ContextArgs, config: &TallyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = load_cleaned(&args.snapshot, &clean_options(config))?;
    let summary = summarize(&board, &render_options(config, args.top_n, flags));

    match flags.format {
        OutputFormat::Table => {
            println!("{}", summary.document);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => {
            let response = ContextResponse {
                board_name: board.board_name,
                kind: summary.kind,
                document: summary.document,
            };
            output(&response, flags.format)
        }
    }
}
