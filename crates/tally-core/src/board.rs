//! Board snapshot input types.
//!
//! The board store hands over a loosely-typed JSON document. It is first read
//! into [`SnapshotDocument`], whose top-level fields are optional so that a
//! missing field can be reported by name, then validated into a
//! [`BoardSnapshot`] that the pipeline consumes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One column definition: a board-unique id and its display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnSchema {
    pub id: String,
    pub title: String,
}

/// One raw cell as exported by the board store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    pub column_id: String,
    /// Cell text. `None` when the store exported the cell as null or omitted it.
    #[serde(default)]
    pub text: Option<String>,
}

/// One raw board item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<RawField>,
}

/// The wire form of a board snapshot, before structural validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDocument {
    pub board_name: Option<String>,
    pub columns: Option<Vec<ColumnSchema>>,
    pub records: Option<Vec<RawRecord>>,
}

/// A structurally valid board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub board_name: String,
    pub columns: Vec<ColumnSchema>,
    pub records: Vec<RawRecord>,
}

impl BoardSnapshot {
    /// Parse and validate a snapshot from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let document: SnapshotDocument = serde_json::from_str(text)?;
        Self::try_from(document)
    }

    /// Validate a snapshot from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        let document: SnapshotDocument = serde_json::from_value(value)?;
        Self::try_from(document)
    }
}

impl TryFrom<SnapshotDocument> for BoardSnapshot {
    type Error = CoreError;

    fn try_from(document: SnapshotDocument) -> Result<Self, Self::Error> {
        let board_name = document
            .board_name
            .ok_or(CoreError::MalformedInput { field: "boardName" })?;
        let columns = document
            .columns
            .ok_or(CoreError::MalformedInput { field: "columns" })?;
        let records = document
            .records
            .ok_or(CoreError::MalformedInput { field: "records" })?;

        Ok(Self {
            board_name,
            columns,
            records,
        })
    }
}
