//! Cleaned board artifacts produced by the pipeline.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Serialize;

use crate::value::NormalizedValue;

/// A record after column resolution and value normalization.
///
/// `values` is keyed by column title in board column order and always holds
/// every non-identity title of its board, missing or not.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CleanedRecord {
    pub id: String,
    /// Empty when the source item had no name.
    pub display_name: String,
    pub values: IndexMap<String, NormalizedValue>,
}

impl CleanedRecord {
    /// Value under `title`, `None` if the board has no such column.
    #[must_use]
    pub fn value(&self, title: &str) -> Option<&NormalizedValue> {
        self.values.get(title)
    }

    #[must_use]
    pub fn is_unnamed(&self) -> bool {
        self.display_name.is_empty()
    }
}

/// Row counts, completeness, and human-readable notes for one cleaning run.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct QualityReport {
    pub total_raw_rows: usize,
    pub cleaned_row_count: usize,
    pub removed_row_count: usize,
    pub missing_field_count: usize,
    /// `cleaned_row_count × column count`.
    pub total_field_count: usize,
    /// Rounded to one decimal; `100.0` when there are no fields.
    pub completeness_percent: f64,
    pub issues: Vec<String>,
}

/// The pipeline's primary output.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CleanedBoard {
    pub board_name: String,
    /// Non-identity column titles in board order.
    pub column_titles: Vec<String>,
    pub records: Vec<CleanedRecord>,
    pub quality: QualityReport,
}

impl CleanedBoard {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
