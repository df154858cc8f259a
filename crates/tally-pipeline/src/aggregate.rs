//! Grouping records by a column with per-group counts and sums.

use indexmap::IndexMap;
use tally_core::cleaned::CleanedRecord;
use tally_core::enums::ColumnRole;
use tally_core::summary::{AggregatedGroup, GroupedSummary};
use tally_core::value::NormalizedValue;

use crate::normalize::parse_number;

pub const UNKNOWN_KEY: &str = "Unknown";
pub const NOT_SET_KEY: &str = "Not set";

/// Order in which groups are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOrdering {
    /// Largest groups first; ties keep first-seen order.
    CountDescending,
    /// Byte-wise ascending by key.
    KeyAscending,
    FirstSeen,
}

/// Key used for a record whose grouping value is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKey {
    /// The record's display name, or the sentinel when it has none.
    DisplayNameThen(&'static str),
    Sentinel(&'static str),
}

impl Default for MissingKey {
    fn default() -> Self {
        Self::DisplayNameThen(UNKNOWN_KEY)
    }
}

/// What to group by and how to present the groups.
#[derive(Debug, Clone, Copy)]
pub struct GroupSpec<'a> {
    pub column: &'a str,
    /// Column whose numeric values are summed per group.
    pub value_column: Option<&'a str>,
    pub ordering: GroupOrdering,
    pub missing: MissingKey,
}

impl<'a> GroupSpec<'a> {
    #[must_use]
    pub fn new(column: &'a str) -> Self {
        Self {
            column,
            value_column: None,
            ordering: GroupOrdering::CountDescending,
            missing: MissingKey::default(),
        }
    }

    /// The presentation policy a role's section uses in the context document.
    #[must_use]
    pub fn for_role(role: ColumnRole, column: &'a str, value_column: Option<&'a str>) -> Self {
        let (ordering, missing) = match role {
            ColumnRole::Stage | ColumnRole::Probability => {
                (GroupOrdering::KeyAscending, MissingKey::Sentinel(UNKNOWN_KEY))
            }
            ColumnRole::Owner => (
                GroupOrdering::CountDescending,
                MissingKey::Sentinel(NOT_SET_KEY),
            ),
            ColumnRole::Customer => (
                GroupOrdering::CountDescending,
                MissingKey::DisplayNameThen(UNKNOWN_KEY),
            ),
            ColumnRole::Nature => (GroupOrdering::FirstSeen, MissingKey::Sentinel(NOT_SET_KEY)),
            _ => (
                GroupOrdering::CountDescending,
                MissingKey::Sentinel(UNKNOWN_KEY),
            ),
        };

        Self {
            column,
            value_column,
            ordering,
            missing,
        }
    }
}

/// Group `records` per `grouping`. Every record lands in exactly one group.
#[must_use]
pub fn aggregate(records: &[CleanedRecord], grouping: &GroupSpec<'_>) -> GroupedSummary {
    let mut groups: IndexMap<String, AggregatedGroup> = IndexMap::new();

    for record in records {
        let key = group_key(record, grouping);
        let amount = grouping
            .value_column
            .and_then(|column| record.value(column))
            .map_or(0.0, numeric_value);

        let group = groups.entry(key).or_insert_with_key(|key| AggregatedGroup {
            key: key.clone(),
            record_count: 0,
            summed_value: 0.0,
        });
        group.record_count += 1;
        group.summed_value += amount;
    }

    let mut groups: Vec<AggregatedGroup> = groups.into_values().collect();
    match grouping.ordering {
        GroupOrdering::CountDescending => {
            groups.sort_by(|a, b| b.record_count.cmp(&a.record_count));
        }
        GroupOrdering::KeyAscending => groups.sort_by(|a, b| a.key.cmp(&b.key)),
        GroupOrdering::FirstSeen => {}
    }

    GroupedSummary {
        column: grouping.column.to_string(),
        groups,
    }
}

/// Float reading of a cell for summing; anything unparsable counts as zero.
#[must_use]
pub fn numeric_value(value: &NormalizedValue) -> f64 {
    match value {
        NormalizedValue::Number(number) => *number,
        NormalizedValue::Text(text) => parse_number(text).unwrap_or(0.0),
        NormalizedValue::Date(_) | NormalizedValue::Missing => 0.0,
    }
}

fn group_key(record: &CleanedRecord, grouping: &GroupSpec<'_>) -> String {
    if let Some(text) = record.value(grouping.column).and_then(NormalizedValue::canonical) {
        return text.into_owned();
    }

    match grouping.missing {
        MissingKey::DisplayNameThen(sentinel) if record.is_unnamed() => sentinel.to_string(),
        MissingKey::DisplayNameThen(_) => record.display_name.clone(),
        MissingKey::Sentinel(sentinel) => sentinel.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(name: &str, stage: Option<&str>, value: NormalizedValue) -> CleanedRecord {
        CleanedRecord {
            id: name.to_string(),
            display_name: name.to_string(),
            values: [
                (
                    "Stage".to_string(),
                    stage.map_or(NormalizedValue::Missing, |s| NormalizedValue::Text(s.to_string())),
                ),
                ("Value".to_string(), value),
            ]
            .into_iter()
            .collect(),
        }
    }

    fn keys(summary: &GroupedSummary) -> Vec<&str> {
        summary.groups.iter().map(|group| group.key.as_str()).collect()
    }

    fn sample() -> Vec<CleanedRecord> {
        vec![
            record("a", Some("B. Qualified"), NormalizedValue::Number(100.0)),
            record("b", Some("A. Lead"), NormalizedValue::Text("50".into())),
            record("c", Some("B. Qualified"), NormalizedValue::Text("n/a".into())),
            record("d", None, NormalizedValue::Missing),
            record("", None, NormalizedValue::Number(5.0)),
        ]
    }

    #[test]
    fn default_fallback_uses_display_name_then_unknown() {
        let records = sample();
        let mut grouping = GroupSpec::new("Stage");
        grouping.ordering = GroupOrdering::FirstSeen;
        let summary = aggregate(&records, &grouping);
        assert_eq!(keys(&summary), vec!["B. Qualified", "A. Lead", "d", "Unknown"]);
    }

    #[test]
    fn counts_and_sums_per_group() {
        let records = sample();
        let grouping = GroupSpec {
            value_column: Some("Value"),
            missing: MissingKey::Sentinel(UNKNOWN_KEY),
            ..GroupSpec::new("Stage")
        };
        let summary = aggregate(&records, &grouping);

        assert_eq!(keys(&summary), vec!["B. Qualified", "Unknown", "A. Lead"]);
        let qualified = &summary.groups[0];
        assert_eq!(qualified.record_count, 2);
        assert!((qualified.summed_value - 100.0).abs() < f64::EPSILON);
        let lead = &summary.groups[2];
        assert!((lead.summed_value - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn count_ties_keep_first_seen_order() {
        let records = vec![
            record("a", Some("Won"), NormalizedValue::Missing),
            record("b", Some("Lost"), NormalizedValue::Missing),
            record("c", Some("Open"), NormalizedValue::Missing),
            record("d", Some("Lost"), NormalizedValue::Missing),
            record("e", Some("Won"), NormalizedValue::Missing),
        ];
        let summary = aggregate(&records, &GroupSpec::new("Stage"));
        assert_eq!(keys(&summary), vec!["Won", "Lost", "Open"]);
    }

    #[test]
    fn stage_role_sorts_lexically() {
        let records = sample();
        let grouping = GroupSpec::for_role(ColumnRole::Stage, "Stage", None);
        let summary = aggregate(&records, &grouping);
        assert_eq!(keys(&summary), vec!["A. Lead", "B. Qualified", "Unknown"]);
    }

    #[test]
    fn owner_role_uses_not_set() {
        let records = sample();
        let grouping = GroupSpec::for_role(ColumnRole::Owner, "Stage", None);
        let summary = aggregate(&records, &grouping);
        assert!(keys(&summary).contains(&"Not set"));
    }

    #[test]
    fn group_counts_sum_to_record_count() {
        let records = sample();
        for role in [ColumnRole::Stage, ColumnRole::Customer, ColumnRole::Nature] {
            let summary = aggregate(&records, &GroupSpec::for_role(role, "Stage", Some("Value")));
            assert_eq!(summary.total_records(), records.len());
        }
    }

    #[test]
    fn missing_group_column_buckets_everything() {
        let records = sample();
        let grouping = GroupSpec {
            missing: MissingKey::Sentinel(UNKNOWN_KEY),
            ..GroupSpec::new("No Such Column")
        };
        let summary = aggregate(&records, &grouping);
        assert_eq!(keys(&summary), vec!["Unknown"]);
        assert_eq!(summary.groups[0].record_count, records.len());
    }
}
