//! Role bindings and grouped summaries.

use indexmap::IndexMap;
use serde::Serialize;

use crate::enums::ColumnRole;

/// Which column title, if any, each role resolved to for one board.
///
/// Roles are stored in the order they were resolved, so iteration is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleBindings {
    bindings: IndexMap<ColumnRole, Option<String>>,
}

impl RoleBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: ColumnRole, title: Option<String>) {
        self.bindings.insert(role, title);
    }

    /// Column title bound to `role`, `None` when unbound.
    #[must_use]
    pub fn get(&self, role: ColumnRole) -> Option<&str> {
        self.bindings.get(&role).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn is_bound(&self, role: ColumnRole) -> bool {
        self.get(role).is_some()
    }

    /// Every resolved role, bound or not.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnRole, Option<&str>)> {
        self.bindings
            .iter()
            .map(|(role, title)| (*role, title.as_deref()))
    }

    /// Bound `(role, title)` pairs in resolution order.
    pub fn bound(&self) -> impl Iterator<Item = (ColumnRole, &str)> {
        self.bindings
            .iter()
            .filter_map(|(role, title)| title.as_deref().map(|title| (*role, title)))
    }
}

impl FromIterator<(ColumnRole, Option<String>)> for RoleBindings {
    fn from_iter<I: IntoIterator<Item = (ColumnRole, Option<String>)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

/// One group of records sharing a key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedGroup {
    pub key: String,
    pub record_count: usize,
    pub summed_value: f64,
}

/// Ordered groups for one grouping column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedSummary {
    pub column: String,
    pub groups: Vec<AggregatedGroup>,
}

impl GroupedSummary {
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.groups.iter().map(|group| group.record_count).sum()
    }
}
