//! Cleaning-stage configuration.

use serde::{Deserialize, Serialize};

fn default_identity_column_id() -> String {
    "name".to_string()
}

fn default_error_sentinel() -> String {
    "#ERROR!".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Column id of the item's own name field. Excluded from cleaned values.
    #[serde(default = "default_identity_column_id")]
    pub identity_column_id: String,

    /// Cell text the board store emits when a formula fails to evaluate.
    #[serde(default = "default_error_sentinel")]
    pub error_sentinel: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            identity_column_id: default_identity_column_id(),
            error_sentinel: default_error_sentinel(),
        }
    }
}
