//! Cross-cutting error types for Tally.
//!
//! Only structural problems with the input snapshot are errors. Unparsable
//! cells, unmatched column roles, and removed rows degrade silently or are
//! reported through `QualityReport::issues`.

use thiserror::Error;

/// Errors that can be raised by any Tally crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The snapshot is missing one of its required top-level fields.
    #[error("Malformed board snapshot: missing required field '{field}'")]
    MalformedInput { field: &'static str },

    /// The snapshot text is not JSON, or a nested value has the wrong shape.
    #[error("Malformed board snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
