//! Column-role detection and board-kind classification.
//!
//! Roles are matched from an ordered table. Each role takes the first title
//! (in board order) whose lowercased form contains one of its keywords. A
//! title claimed by an earlier role is not offered to later ones, so
//! "Execution Status" becomes the execution status and not the plain status.

use tally_core::enums::{BoardKind, ColumnRole};
use tally_core::summary::RoleBindings;

/// One entry of the role table.
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub role: ColumnRole,
    pub keywords: &'static [&'static str],
}

/// Role table in priority order.
pub const ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        role: ColumnRole::Serial,
        keywords: &["serial", "s.no", "sr no", "sr. no"],
    },
    RoleRule {
        role: ColumnRole::DateField,
        keywords: &["date"],
    },
    RoleRule {
        role: ColumnRole::Probability,
        keywords: &["probability", "closure"],
    },
    RoleRule {
        role: ColumnRole::ExecutionStatus,
        keywords: &["execution", "wo status"],
    },
    RoleRule {
        role: ColumnRole::Stage,
        keywords: &["stage"],
    },
    RoleRule {
        role: ColumnRole::Status,
        keywords: &["status"],
    },
    RoleRule {
        role: ColumnRole::MonetaryAmount,
        keywords: &["amount", "value", "revenue", "billed", "price"],
    },
    RoleRule {
        role: ColumnRole::Sector,
        keywords: &["sector", "industry", "vertical"],
    },
    RoleRule {
        role: ColumnRole::Owner,
        keywords: &["owner", "assigned", "personnel", "manager"],
    },
    RoleRule {
        role: ColumnRole::Customer,
        keywords: &["customer", "client", "company", "account"],
    },
    RoleRule {
        role: ColumnRole::Nature,
        keywords: &["nature", "type", "category"],
    },
];

const PIPELINE_KEYWORDS: &[&str] = &["deal", "stage", "closure", "probability", "pipeline"];

const EXECUTION_KEYWORDS: &[&str] = &[
    "execution",
    "billed",
    "billing",
    "collected",
    "receivable",
    "serial",
    "work order",
];

/// Bind every role in [`ROLE_RULES`] to a title, or to nothing.
#[must_use]
pub fn detect_roles(titles: &[String]) -> RoleBindings {
    let lowered: Vec<String> = titles.iter().map(|title| title.to_lowercase()).collect();
    let mut claimed = vec![false; titles.len()];
    let mut bindings = RoleBindings::new();

    for rule in ROLE_RULES {
        let hit = lowered.iter().enumerate().position(|(idx, title)| {
            !claimed[idx] && rule.keywords.iter().any(|keyword| title.contains(keyword))
        });

        if let Some(idx) = hit {
            claimed[idx] = true;
            bindings.insert(rule.role, Some(titles[idx].clone()));
        } else {
            bindings.insert(rule.role, None);
        }
    }

    bindings
}

/// Classify a board from its titles. Pipeline keywords are tested first.
#[must_use]
pub fn classify_board(titles: &[String]) -> BoardKind {
    let lowered: Vec<String> = titles.iter().map(|title| title.to_lowercase()).collect();
    let matches_any = |keywords: &[&str]| {
        lowered
            .iter()
            .any(|title| keywords.iter().any(|keyword| title.contains(keyword)))
    };

    if matches_any(PIPELINE_KEYWORDS) {
        BoardKind::Pipeline
    } else if matches_any(EXECUTION_KEYWORDS) {
        BoardKind::Execution
    } else {
        BoardKind::Generic
    }
}
