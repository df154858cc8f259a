//! Context document rendering.
//!
//! The document is plain text in a fixed layout:
//!
//! ```text
//! Board: <name> | Rows: <n> | Completeness: <p>%
//! Data quality notes: <issue>; <issue>
//!
//! <Role> breakdown (<column>):
//! - <key>: <count> records, total <sum>
//!
//! Top <k> records by <amount column>:
//! | Name | <column> | ... |
//! ```
//!
//! Rendering is a pure function of its inputs: no clock, no randomness, no
//! hash-order iteration.

use std::cmp::Ordering;

use tally_core::cleaned::{CleanedBoard, CleanedRecord};
use tally_core::enums::{BoardKind, ColumnRole};
use tally_core::summary::RoleBindings;
use tally_core::value::NormalizedValue;

use crate::aggregate::{GroupSpec, aggregate, numeric_value};
use crate::format::abbreviate;
use crate::roles::{classify_board, detect_roles};

/// Numbers at or above this magnitude render abbreviated in table cells.
const ABBREVIATION_THRESHOLD: f64 = 1_000.0;

const PIPELINE_SECTIONS: &[ColumnRole] = &[
    ColumnRole::Stage,
    ColumnRole::Status,
    ColumnRole::Sector,
    ColumnRole::Owner,
    ColumnRole::Probability,
];

const EXECUTION_SECTIONS: &[ColumnRole] = &[
    ColumnRole::ExecutionStatus,
    ColumnRole::Status,
    ColumnRole::Sector,
    ColumnRole::Nature,
    ColumnRole::Customer,
    ColumnRole::Owner,
];

const PIPELINE_TABLE: &[ColumnRole] = &[
    ColumnRole::Customer,
    ColumnRole::Stage,
    ColumnRole::Status,
    ColumnRole::Sector,
    ColumnRole::Owner,
    ColumnRole::Probability,
    ColumnRole::MonetaryAmount,
    ColumnRole::DateField,
];

const EXECUTION_TABLE: &[ColumnRole] = &[
    ColumnRole::Serial,
    ColumnRole::Customer,
    ColumnRole::ExecutionStatus,
    ColumnRole::Status,
    ColumnRole::Sector,
    ColumnRole::Nature,
    ColumnRole::MonetaryAmount,
    ColumnRole::DateField,
];

/// Size bounds for the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum detail rows for a recognized board.
    pub top_n: usize,
    /// Columns listed for a board of unrecognized kind.
    pub generic_columns: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            top_n: 20,
            generic_columns: 8,
        }
    }
}

/// Role detection, board kind, and the rendered document for one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSummary {
    pub kind: BoardKind,
    pub bindings: RoleBindings,
    pub document: String,
}

/// Detect roles and kind for `board`, then render its document.
#[must_use]
pub fn summarize(board: &CleanedBoard, options: &RenderOptions) -> ContextSummary {
    let bindings = detect_roles(&board.column_titles);
    let kind = classify_board(&board.column_titles);
    tracing::debug!(
        board = %board.board_name,
        kind = %kind,
        bound_roles = bindings.bound().count(),
        "detected column roles"
    );
    let document = render_context(board, &bindings, kind, options);
    ContextSummary {
        kind,
        bindings,
        document,
    }
}

/// Render the context document.
#[must_use]
pub fn render_context(
    board: &CleanedBoard,
    bindings: &RoleBindings,
    kind: BoardKind,
    options: &RenderOptions,
) -> String {
    if board.is_empty() {
        return format!("Board: {} | No data available", board.board_name);
    }

    let mut lines = vec![format!(
        "Board: {} | Rows: {} | Completeness: {:.1}%",
        board.board_name, board.quality.cleaned_row_count, board.quality.completeness_percent
    )];
    if !board.quality.issues.is_empty() {
        lines.push(format!(
            "Data quality notes: {}",
            board.quality.issues.join("; ")
        ));
    }

    match kind {
        BoardKind::Pipeline => {
            render_sections(&mut lines, board, bindings, PIPELINE_SECTIONS);
            render_top_table(&mut lines, board, bindings, PIPELINE_TABLE, options.top_n);
        }
        BoardKind::Execution => {
            render_sections(&mut lines, board, bindings, EXECUTION_SECTIONS);
            render_top_table(&mut lines, board, bindings, EXECUTION_TABLE, options.top_n);
        }
        BoardKind::Generic => render_generic_table(&mut lines, board, options.generic_columns),
    }

    lines.join("\n")
}

fn render_sections(
    lines: &mut Vec<String>,
    board: &CleanedBoard,
    bindings: &RoleBindings,
    roles: &[ColumnRole],
) {
    let amount_column = bindings.get(ColumnRole::MonetaryAmount);

    for role in roles {
        let Some(column) = bindings.get(*role) else {
            continue;
        };
        let summary = aggregate(
            &board.records,
            &GroupSpec::for_role(*role, column, amount_column),
        );

        lines.push(String::new());
        lines.push(format!("{} breakdown ({column}):", role.label()));
        for group in &summary.groups {
            let mut line = format!(
                "- {}: {} {}",
                group.key,
                group.record_count,
                record_word(group.record_count)
            );
            if amount_column.is_some() {
                line.push_str(", total ");
                line.push_str(&abbreviate(group.summed_value));
            }
            lines.push(line);
        }
    }
}

fn render_top_table(
    lines: &mut Vec<String>,
    board: &CleanedBoard,
    bindings: &RoleBindings,
    table_roles: &[ColumnRole],
    top_n: usize,
) {
    let columns: Vec<&str> = table_roles
        .iter()
        .filter_map(|role| bindings.get(*role))
        .collect();
    let amount_column = bindings.get(ColumnRole::MonetaryAmount);

    let mut ranked: Vec<&CleanedRecord> = board.records.iter().collect();
    if let Some(amount_column) = amount_column {
        // Stable: equal amounts keep their original order.
        ranked.sort_by(|a, b| {
            compare_amounts_desc(
                ranking_amount(a, amount_column),
                ranking_amount(b, amount_column),
            )
        });
    }
    ranked.truncate(top_n);

    lines.push(String::new());
    match amount_column {
        Some(column) => lines.push(format!("Top {} records by {column}:", ranked.len())),
        None => lines.push(format!("First {} records:", ranked.len())),
    }
    push_table(lines, &columns, &ranked);
}

/// Amount used for ranking, counted the way group sums count it.
/// `None` only for a missing cell, which ranks last.
fn ranking_amount(record: &CleanedRecord, column: &str) -> Option<f64> {
    record
        .value(column)
        .filter(|value| !value.is_missing())
        .map(numeric_value)
}

fn render_generic_table(lines: &mut Vec<String>, board: &CleanedBoard, column_limit: usize) {
    let columns: Vec<&str> = board
        .column_titles
        .iter()
        .take(column_limit)
        .map(String::as_str)
        .collect();
    let records: Vec<&CleanedRecord> = board.records.iter().collect();

    lines.push(String::new());
    lines.push(format!("Records ({}):", records.len()));
    push_table(lines, &columns, &records);
}

fn push_table(lines: &mut Vec<String>, columns: &[&str], records: &[&CleanedRecord]) {
    let mut header = String::from("| Name |");
    for column in columns {
        header.push(' ');
        header.push_str(&escape_cell(column));
        header.push_str(" |");
    }
    lines.push(header);

    for record in records {
        let name = if record.is_unnamed() {
            "-".to_string()
        } else {
            escape_cell(&record.display_name)
        };
        let mut row = format!("| {name} |");
        for column in columns {
            row.push(' ');
            row.push_str(&render_cell(record.value(column)));
            row.push_str(" |");
        }
        lines.push(row);
    }
}

fn render_cell(value: Option<&NormalizedValue>) -> String {
    match value {
        Some(NormalizedValue::Number(number)) if number.abs() >= ABBREVIATION_THRESHOLD => {
            abbreviate(*number)
        }
        Some(NormalizedValue::Number(number)) => number.to_string(),
        Some(NormalizedValue::Text(text) | NormalizedValue::Date(text)) => escape_cell(text),
        Some(NormalizedValue::Missing) | None => "-".to_string(),
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "/")
}

/// Descending by amount; records without an amount sort after all others.
fn compare_amounts_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

const fn record_word(count: usize) -> &'static str {
    if count == 1 { "record" } else { "records" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tally_core::cleaned::QualityReport;

    fn quality(rows: usize, issues: &[&str]) -> QualityReport {
        QualityReport {
            total_raw_rows: rows,
            cleaned_row_count: rows,
            removed_row_count: 0,
            missing_field_count: 0,
            total_field_count: rows * 2,
            completeness_percent: 100.0,
            issues: issues.iter().map(|issue| (*issue).to_string()).collect(),
        }
    }

    fn record(name: &str, values: &[(&str, NormalizedValue)]) -> CleanedRecord {
        CleanedRecord {
            id: name.to_string(),
            display_name: name.to_string(),
            values: values
                .iter()
                .map(|(title, value)| ((*title).to_string(), value.clone()))
                .collect(),
        }
    }

    fn text(value: &str) -> NormalizedValue {
        NormalizedValue::Text(value.to_string())
    }

    #[test]
    fn empty_board_renders_single_line() {
        let board = CleanedBoard {
            board_name: "Deals".to_string(),
            column_titles: vec!["Deal Stage".to_string()],
            records: Vec::new(),
            quality: quality(0, &["Removed 3 junk/empty/header rows"]),
        };
        let doc = render_context(
            &board,
            &detect_roles(&board.column_titles),
            BoardKind::Pipeline,
            &RenderOptions::default(),
        );
        assert_eq!(doc, "Board: Deals | No data available");
    }

    #[test]
    fn pipeline_board_document() {
        let board = CleanedBoard {
            board_name: "Deals".to_string(),
            column_titles: vec!["Deal Stage".to_string(), "Deal Value".to_string()],
            records: vec![
                record(
                    "Small",
                    &[("Deal Stage", text("B. Proposal")), ("Deal Value", NormalizedValue::Number(500.0))],
                ),
                record(
                    "Big",
                    &[("Deal Stage", text("A. Lead")), ("Deal Value", NormalizedValue::Number(2_500_000.0))],
                ),
                record("Unpriced", &[("Deal Stage", text("A. Lead")), ("Deal Value", NormalizedValue::Missing)]),
            ],
            quality: quality(3, &["1 of 6 field values are missing (16.7%)"]),
        };
        let summary = summarize(&board, &RenderOptions::default());

        assert_eq!(summary.kind, BoardKind::Pipeline);
        assert_eq!(
            summary.document,
            [
                "Board: Deals | Rows: 3 | Completeness: 100.0%",
                "Data quality notes: 1 of 6 field values are missing (16.7%)",
                "",
                "Stage breakdown (Deal Stage):",
                "- A. Lead: 2 records, total 25.00L",
                "- B. Proposal: 1 record, total 500",
                "",
                "Top 3 records by Deal Value:",
                "| Name | Deal Stage | Deal Value |",
                "| Big | A. Lead | 25.00L |",
                "| Small | B. Proposal | 500 |",
                "| Unpriced | A. Lead | - |",
            ]
            .join("\n")
        );
    }

    #[test]
    fn top_table_is_bounded_and_stable() {
        let records: Vec<CleanedRecord> = (0..5)
            .map(|idx| {
                record(
                    &format!("r{idx}"),
                    &[
                        ("Deal Status", text("Open")),
                        ("Amount", NormalizedValue::Number(if idx == 3 { 10.0 } else { 1.0 })),
                    ],
                )
            })
            .collect();
        let board = CleanedBoard {
            board_name: "Deals".to_string(),
            column_titles: vec!["Deal Status".to_string(), "Amount".to_string()],
            records,
            quality: quality(5, &[]),
        };
        let options = RenderOptions {
            top_n: 3,
            ..RenderOptions::default()
        };
        let doc = render_context(
            &board,
            &detect_roles(&board.column_titles),
            BoardKind::Pipeline,
            &options,
        );

        let rows: Vec<&str> = doc.lines().filter(|line| line.starts_with("| r")).collect();
        assert_eq!(
            rows,
            vec!["| r3 | Open | 10 |", "| r0 | Open | 1 |", "| r1 | Open | 1 |"]
        );
        assert!(doc.contains("Top 3 records by Amount:"));
    }

    #[test]
    fn unparsable_amount_ranks_as_zero_and_missing_ranks_last() {
        let board = CleanedBoard {
            board_name: "Deals".to_string(),
            column_titles: vec!["Deal Status".to_string(), "Amount".to_string()],
            records: vec![
                record("Refund", &[("Deal Status", text("Open")), ("Amount", NormalizedValue::Number(-500.0))]),
                record("Blank", &[("Deal Status", text("Open")), ("Amount", NormalizedValue::Missing)]),
                record("Pending", &[("Deal Status", text("Open")), ("Amount", text("TBD"))]),
                record("Deal", &[("Deal Status", text("Open")), ("Amount", NormalizedValue::Number(100.0))]),
            ],
            quality: quality(4, &[]),
        };
        let doc = render_context(
            &board,
            &detect_roles(&board.column_titles),
            BoardKind::Pipeline,
            &RenderOptions::default(),
        );

        let rows: Vec<&str> = doc
            .lines()
            .filter(|line| line.starts_with("| ") && !line.starts_with("| Name"))
            .collect();
        assert_eq!(
            rows,
            vec![
                "| Deal | Open | 100 |",
                "| Pending | Open | TBD |",
                "| Refund | Open | -500 |",
                "| Blank | Open | - |",
            ]
        );
    }

    #[test]
    fn generic_board_lists_all_records_with_limited_columns() {
        let titles: Vec<String> = (1..=10).map(|idx| format!("C{idx}")).collect();
        let records: Vec<CleanedRecord> = (0..25)
            .map(|idx| {
                let values: Vec<(&str, NormalizedValue)> = titles
                    .iter()
                    .map(|title| (title.as_str(), text("x")))
                    .collect();
                record(&format!("row{idx}"), &values)
            })
            .collect();
        let board = CleanedBoard {
            board_name: "Misc".to_string(),
            column_titles: titles.clone(),
            records,
            quality: quality(25, &[]),
        };
        let summary = summarize(&board, &RenderOptions::default());

        assert_eq!(summary.kind, BoardKind::Generic);
        assert!(!summary.document.contains("breakdown"));
        assert!(summary.document.contains("| Name | C1 | C2 | C3 | C4 | C5 | C6 | C7 | C8 |"));
        assert!(!summary.document.contains("C9"));
        assert_eq!(
            summary
                .document
                .lines()
                .filter(|line| line.starts_with("| row"))
                .count(),
            25
        );
        assert!(summary.document.contains("| row0 |"));
    }

    #[test]
    fn pipes_in_values_are_escaped() {
        let board = CleanedBoard {
            board_name: "Misc".to_string(),
            column_titles: vec!["Notes".to_string()],
            records: vec![record("a|b", &[("Notes", text("x | y"))])],
            quality: quality(1, &[]),
        };
        let doc = render_context(&board, &RoleBindings::new(), BoardKind::Generic, &RenderOptions::default());
        assert!(doc.contains("| a/b | x / y |"));
    }

    #[test]
    fn execution_sections_follow_fixed_order() {
        let board = CleanedBoard {
            board_name: "Work Orders".to_string(),
            column_titles: vec![
                "Customer Name Code".to_string(),
                "Execution Status".to_string(),
                "Nature of Work".to_string(),
                "Billed Value in Rupees".to_string(),
            ],
            records: vec![
                record(
                    "WO-1",
                    &[
                        ("Customer Name Code", text("C1")),
                        ("Execution Status", text("Ongoing")),
                        ("Nature of Work", NormalizedValue::Missing),
                        ("Billed Value in Rupees", NormalizedValue::Number(150_000.0)),
                    ],
                ),
                record(
                    "WO-2",
                    &[
                        ("Customer Name Code", NormalizedValue::Missing),
                        ("Execution Status", text("Completed")),
                        ("Nature of Work", text("One time Project")),
                        ("Billed Value in Rupees", NormalizedValue::Number(20_000_000.0)),
                    ],
                ),
            ],
            quality: quality(2, &[]),
        };
        let summary = summarize(&board, &RenderOptions::default());
        assert_eq!(summary.kind, BoardKind::Execution);

        let headings: Vec<&str> = summary
            .document
            .lines()
            .filter(|line| line.ends_with("):") || line.starts_with("Top "))
            .collect();
        assert_eq!(
            headings,
            vec![
                "Execution status breakdown (Execution Status):",
                "Nature of work breakdown (Nature of Work):",
                "Customer breakdown (Customer Name Code):",
                "Top 2 records by Billed Value in Rupees:",
            ]
        );
        assert!(summary.document.contains("- Not set: 1 record, total 1.50L"));
        assert!(summary.document.contains("- WO-2: 1 record, total 2.00Cr"));
        assert!(summary.document.contains("| WO-2 | - | Completed | One time Project | 2.00Cr |"));
    }
}
