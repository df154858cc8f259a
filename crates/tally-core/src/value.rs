//! The normalized cell value.

use std::borrow::Cow;
use std::fmt;

use schemars::JsonSchema;
use serde::{Serialize, Serializer};

/// A cell after normalization.
///
/// `Text` also carries values that were expected to be dates or numbers but
/// did not parse; the original trimmed text is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedValue {
    Text(String),
    Number(f64),
    /// Canonical `YYYY-MM-DD` string.
    Date(String),
    Missing,
}

impl NormalizedValue {
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Canonical string form, `None` for missing values.
    #[must_use]
    pub fn canonical(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(text) | Self::Date(text) => Some(Cow::Borrowed(text)),
            Self::Number(value) => Some(Cow::Owned(value.to_string())),
            Self::Missing => None,
        }
    }
}

/// Missing values display as the empty string.
impl fmt::Display for NormalizedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Date(text) => f.write_str(text),
            Self::Number(value) => write!(f, "{value}"),
            Self::Missing => Ok(()),
        }
    }
}

impl Serialize for NormalizedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.canonical() {
            Some(text) => serializer.serialize_str(&text),
            None => serializer.serialize_none(),
        }
    }
}

impl JsonSchema for NormalizedValue {
    fn schema_name() -> Cow<'static, str> {
        "NormalizedValue".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": ["string", "null"],
            "description": "Canonical cell text, number, or YYYY-MM-DD date; null when missing."
        })
    }
}
