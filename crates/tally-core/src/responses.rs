//! CLI response types returned as JSON by `tally` commands.

use serde::Serialize;

use crate::enums::BoardKind;
use crate::summary::RoleBindings;

/// Response from `tally roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolesResponse {
    pub board_name: String,
    pub kind: BoardKind,
    pub bindings: RoleBindings,
}

/// Response from `tally context` in structured output modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextResponse {
    pub board_name: String,
    pub kind: BoardKind,
    pub document: String,
}
