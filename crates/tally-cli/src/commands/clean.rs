use tally_config::TallyConfig;
use tally_core::cleaned::CleanedBoard;

use crate::bootstrap::clean_options;
use crate::cli::root_commands::SnapshotArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::snapshot::load_cleaned;
use crate::output::output;
use crate::output::table::{TableOptions, render_table};

/// Handle `tally clean`.
pub fn handle(args: &SnapshotArgs, config: &TallyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = load_cleaned(&args.snapshot, &clean_options(config))?;

    match flags.format {
        OutputFormat::Table => {
            println!("{}", records_table(&board, TableOptions::from_env()));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&board, flags.format),
    }
}

/// One row per cleaned record: the name, then every column in board order.
fn records_table(board: &CleanedBoard, options: TableOptions) -> String {
    if board.records.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = vec!["Name"];
    headers.extend(board.column_titles.iter().map(String::as_str));

    let rows = board
        .records
        .iter()
        .map(|record| {
            let mut row = vec![record.display_name.clone()];
            row.extend(board.column_titles.iter().map(|title| {
                record
                    .value(title)
                    .filter(|value| !value.is_missing())
                    .map_or_else(|| String::from("-"), ToString::to_string)
            }));
            row
        })
        .collect::<Vec<_>>();

    render_table(&headers, &rows, options)
}
