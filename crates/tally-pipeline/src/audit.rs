//! Completeness statistics and data-quality notes.

use tally_core::cleaned::{CleanedRecord, QualityReport};

/// Row bookkeeping carried over from the filter stage.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    pub total_raw_rows: usize,
    pub removed_row_count: usize,
    /// One note per dropped header row, in drop order.
    pub header_notes: Vec<String>,
}

/// Build the quality report for the records that survived filtering.
///
/// Issue order: per-row header notes, then the removed-row summary, then the
/// missing-value summary.
#[must_use]
pub fn audit(
    records: &[CleanedRecord],
    column_titles: &[String],
    outcome: FilterOutcome,
) -> QualityReport {
    let total_field_count = records.len() * column_titles.len();
    let missing_field_count = records
        .iter()
        .map(|record| {
            column_titles
                .iter()
                .filter(|title| record.value(title).is_none_or(|value| value.is_missing()))
                .count()
        })
        .sum::<usize>();

    let mut issues = outcome.header_notes;
    if outcome.removed_row_count > 0 {
        issues.push(format!(
            "Removed {} junk/empty/header rows",
            outcome.removed_row_count
        ));
    }
    if missing_field_count > 0 {
        issues.push(format!(
            "{missing_field_count} of {total_field_count} field values are missing ({:.1}%)",
            missing_percent(missing_field_count, total_field_count)
        ));
    }

    QualityReport {
        total_raw_rows: outcome.total_raw_rows,
        cleaned_row_count: records.len(),
        removed_row_count: outcome.removed_row_count,
        missing_field_count,
        total_field_count,
        completeness_percent: completeness_percent(missing_field_count, total_field_count),
        issues,
    }
}

/// `round((1 - missing / total) × 100, 1)`, or `100.0` with no fields.
#[must_use]
pub fn completeness_percent(missing: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    round_one_decimal(100.0 - missing_ratio(missing, total) * 100.0)
}

fn missing_percent(missing: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_one_decimal(missing_ratio(missing, total) * 100.0)
}

#[allow(clippy::cast_precision_loss)]
fn missing_ratio(missing: usize, total: usize) -> f64 {
    missing as f64 / total as f64
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
