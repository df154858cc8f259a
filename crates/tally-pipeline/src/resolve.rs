//! Column id to title resolution.

use std::collections::HashMap;

use tally_core::board::{ColumnSchema, RawRecord};

/// Maps column ids to titles. Duplicate ids resolve to the last title seen.
#[derive(Debug, Clone, Default)]
pub struct ColumnResolver {
    titles: HashMap<String, String>,
}

impl ColumnResolver {
    #[must_use]
    pub fn new(columns: &[ColumnSchema]) -> Self {
        let titles = columns
            .iter()
            .map(|column| (column.id.clone(), column.title.clone()))
            .collect();
        Self { titles }
    }

    /// Title for `id`, or `id` itself when the schema does not know it.
    #[must_use]
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.titles.get(id).map_or(id, String::as_str)
    }

    #[must_use]
    pub fn is_known(&self, id: &str) -> bool {
        self.titles.contains_key(id)
    }

    /// Ordered, distinct non-identity titles for a board.
    ///
    /// Schema titles come first in schema order. Field ids that the schema
    /// does not know follow as literal titles, in the order records reference
    /// them, so that no field is ever dropped.
    #[must_use]
    pub fn board_titles(
        &self,
        columns: &[ColumnSchema],
        records: &[RawRecord],
        identity_column_id: &str,
    ) -> Vec<String> {
        let mut titles: Vec<String> = Vec::with_capacity(columns.len());

        for column in columns {
            if column.id != identity_column_id {
                push_unique(&mut titles, self.resolve(&column.id));
            }
        }

        for record in records {
            for field in &record.fields {
                if field.column_id != identity_column_id
                    && !self.is_known(&field.column_id)
                    && push_unique(&mut titles, &field.column_id)
                {
                    tracing::warn!(
                        column_id = %field.column_id,
                        record_id = %record.id,
                        "field references an unknown column id; keeping id as title"
                    );
                }
            }
        }

        titles
    }
}

/// Returns `true` when `title` was not already present.
fn push_unique(titles: &mut Vec<String>, title: &str) -> bool {
    if titles.iter().any(|existing| existing == title) {
        return false;
    }
    titles.push(title.to_string());
    true
}
