//! Snapshot cleaning: resolve, normalize, filter, audit.

use indexmap::IndexMap;
use tally_core::board::{BoardSnapshot, RawRecord};
use tally_core::cleaned::{CleanedBoard, CleanedRecord};
use tally_core::errors::CoreError;
use tally_core::value::NormalizedValue;

use crate::audit::{FilterOutcome, audit};
use crate::filter::{RowVerdict, check_row};
use crate::normalize::{FORMULA_ERROR_SENTINEL, ValueNormalizer};
use crate::resolve::ColumnResolver;

/// Knobs for the cleaning stage.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Column id of the item's own name field.
    pub identity_column_id: String,
    pub error_sentinel: String,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            identity_column_id: "name".to_string(),
            error_sentinel: FORMULA_ERROR_SENTINEL.to_string(),
        }
    }
}

/// Parse a JSON snapshot and clean it.
pub fn clean_json(text: &str, options: &CleanOptions) -> Result<CleanedBoard, CoreError> {
    let snapshot = BoardSnapshot::from_json(text)?;
    Ok(clean_board(&snapshot, options))
}

/// Turn a validated snapshot into a cleaned board with its quality report.
#[must_use]
pub fn clean_board(snapshot: &BoardSnapshot, options: &CleanOptions) -> CleanedBoard {
    let resolver = ColumnResolver::new(&snapshot.columns);
    let column_titles = resolver.board_titles(
        &snapshot.columns,
        &snapshot.records,
        &options.identity_column_id,
    );
    let normalizer = ValueNormalizer::new(options.error_sentinel.clone());

    let mut outcome = FilterOutcome {
        total_raw_rows: snapshot.records.len(),
        ..FilterOutcome::default()
    };
    let mut records = Vec::with_capacity(snapshot.records.len());

    for raw in &snapshot.records {
        let record = clean_record(raw, &column_titles, &resolver, &normalizer, options);
        match check_row(&record) {
            RowVerdict::Keep => records.push(record),
            RowVerdict::DropEmpty => {
                tracing::debug!(record_id = %record.id, "dropping empty row");
                outcome.removed_row_count += 1;
            }
            RowVerdict::DropHeader { note } => {
                tracing::warn!(record_id = %record.id, "dropping embedded header row");
                outcome.removed_row_count += 1;
                outcome.header_notes.push(note);
            }
        }
    }

    let quality = audit(&records, &column_titles, outcome);
    tracing::debug!(
        board = %snapshot.board_name,
        raw = quality.total_raw_rows,
        cleaned = quality.cleaned_row_count,
        removed = quality.removed_row_count,
        completeness = quality.completeness_percent,
        "cleaned board"
    );

    CleanedBoard {
        board_name: snapshot.board_name.clone(),
        column_titles,
        records,
        quality,
    }
}

fn clean_record(
    raw: &RawRecord,
    column_titles: &[String],
    resolver: &ColumnResolver,
    normalizer: &ValueNormalizer,
    options: &CleanOptions,
) -> CleanedRecord {
    let mut values: IndexMap<String, NormalizedValue> = column_titles
        .iter()
        .map(|title| (title.clone(), NormalizedValue::Missing))
        .collect();

    for field in &raw.fields {
        if field.column_id == options.identity_column_id {
            continue;
        }
        let title = resolver.resolve(&field.column_id);
        let value = normalizer.normalize(field.text.as_deref(), title);
        // Titles shared by several ids collapse to one key; the last field wins.
        if let Some(slot) = values.get_mut(title) {
            *slot = value;
        }
    }

    CleanedRecord {
        id: raw.id.clone(),
        display_name: raw
            .display_name
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        values,
    }
}
