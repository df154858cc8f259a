//! Row filter: separates genuine records from import artifacts.
//!
//! Two kinds of rows are dropped, checked in this order:
//! 1. Empty rows: no display name and no value in any column.
//! 2. Embedded header rows: some value equals the title of its own column,
//!    which is what a spreadsheet header line looks like after import.
//!
//! The header check cannot tell a header line from a record whose value
//! happens to equal its column title (a `Status` column holding `"Status"`).
//! Both are dropped.

use tally_core::cleaned::CleanedRecord;

/// Outcome of filtering one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowVerdict {
    Keep,
    DropEmpty,
    /// Dropped as a header row; `note` names the record for the quality report.
    DropHeader { note: String },
}

impl RowVerdict {
    #[must_use]
    pub const fn is_kept(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

/// Decide whether `record` is data or import noise.
#[must_use]
pub fn check_row(record: &CleanedRecord) -> RowVerdict {
    if record.is_unnamed() && record.values.values().all(|value| value.is_missing()) {
        return RowVerdict::DropEmpty;
    }

    let is_header = record
        .values
        .iter()
        .any(|(title, value)| value.canonical().is_some_and(|text| text == title.as_str()));

    if is_header {
        let name = if record.is_unnamed() {
            "empty"
        } else {
            record.display_name.as_str()
        };
        return RowVerdict::DropHeader {
            note: format!("Removed embedded header row \"{name}\""),
        };
    }

    RowVerdict::Keep
}
