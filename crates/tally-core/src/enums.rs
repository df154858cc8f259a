//! Column roles and board kinds.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ColumnRole
// ---------------------------------------------------------------------------

/// Semantic category of a board column, inferred from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Status,
    MonetaryAmount,
    Sector,
    Stage,
    Owner,
    Probability,
    ExecutionStatus,
    Customer,
    Nature,
    Serial,
    DateField,
    /// Fallback for columns no other role claims. Never bound.
    Generic,
}

impl ColumnRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::MonetaryAmount => "monetary_amount",
            Self::Sector => "sector",
            Self::Stage => "stage",
            Self::Owner => "owner",
            Self::Probability => "probability",
            Self::ExecutionStatus => "execution_status",
            Self::Customer => "customer",
            Self::Nature => "nature",
            Self::Serial => "serial",
            Self::DateField => "date_field",
            Self::Generic => "generic",
        }
    }

    /// Human-readable label used in rendered section titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Status => "Status",
            Self::MonetaryAmount => "Amount",
            Self::Sector => "Sector",
            Self::Stage => "Stage",
            Self::Owner => "Owner",
            Self::Probability => "Probability",
            Self::ExecutionStatus => "Execution status",
            Self::Customer => "Customer",
            Self::Nature => "Nature of work",
            Self::Serial => "Serial",
            Self::DateField => "Date",
            Self::Generic => "Other",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BoardKind
// ---------------------------------------------------------------------------

/// What a board tracks, inferred from its column titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BoardKind {
    /// Sales pipeline: deals, stages, closure probability.
    Pipeline,
    /// Execution tracking: work orders, billing, collections.
    Execution,
    Generic,
}

impl BoardKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pipeline => "pipeline",
            Self::Execution => "execution",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
