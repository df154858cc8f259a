//! Context document rendering configuration.

use serde::{Deserialize, Serialize};

/// Default detail table size.
const fn default_top_n() -> usize {
    20
}

/// Default column count for boards of unrecognized kind.
const fn default_generic_columns() -> usize {
    8
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Maximum rows in the detail table of a recognized board.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Columns listed per record for a board of unrecognized kind.
    #[serde(default = "default_generic_columns")]
    pub generic_columns: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            generic_columns: default_generic_columns(),
        }
    }
}
