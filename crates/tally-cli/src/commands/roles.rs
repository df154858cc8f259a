use tally_config::TallyConfig;
use tally_core::responses::RolesResponse;
use tally_pipeline::roles::{classify_board, detect_roles};

use crate::bootstrap::clean_options;
use crate::cli::root_commands::SnapshotArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::snapshot::load_cleaned;
use crate::output::output;
use crate::output::table::{TableOptions, render_table};

/// Handle `tally roles`.
pub fn handle(args: &SnapshotArgs, config: &TallyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = load_cleaned(&args.snapshot, &clean_options(config))?;
    let response = RolesResponse {
        kind: classify_board(&board.column_titles),
        bindings: detect_roles(&board.column_titles),
        board_name: board.board_name,
    };

    match flags.format {
        OutputFormat::Table => {
            println!("{}", roles_table(&response, TableOptions::from_env()));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
    }
}

fn roles_table(response: &RolesResponse, options: TableOptions) -> String {
    let rows = response
        .bindings
        .iter()
        .map(|(role, title)| vec![role.label().to_string(), title.unwrap_or("-").to_string()])
        .collect::<Vec<_>>();

    format!(
        "Board: {} ({})\n{}",
        response.board_name,
        response.kind,
        render_table(&["role", "column"], &rows, options)
    )
}
