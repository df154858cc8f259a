//! Raw cell text to [`NormalizedValue`].
//!
//! The column title decides how a cell is read:
//! - titles containing `date` are parsed as dates
//! - titles containing a numeric keyword (`amount`, `value`, ...) are parsed as numbers
//! - everything else is kept as trimmed text
//!
//! Parsing never fails. A cell that does not fit its expected type is kept as
//! `Text` with its original trimmed content.
//!
//! Numeric dates are read day-first (`05/03/2024` is 5 March 2024). Month-first
//! input is never attempted, so one board cannot mix both readings.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tally_core::value::NormalizedValue;

/// Cell text the board store emits when a formula fails to evaluate.
pub const FORMULA_ERROR_SENTINEL: &str = "#ERROR!";

/// Title keywords that mark a column as numeric.
pub const NUMERIC_KEYWORDS: &[&str] = &[
    "amount",
    "value",
    "billed",
    "collected",
    "receivable",
    "revenue",
    "price",
    "cost",
];

const CURRENCY_SYMBOLS: &[char] = &['₹', '$', '€', '£', '¥'];

static ISO_DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("ISO date pattern is valid"));

static DAY_FIRST_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})[/-]([0-9]{1,2})[/-]([0-9]{4})").expect("day-first date pattern is valid")
});

/// Normalizes cells against a configurable formula-error sentinel.
#[derive(Debug, Clone)]
pub struct ValueNormalizer {
    error_sentinel: String,
}

impl Default for ValueNormalizer {
    fn default() -> Self {
        Self::new(FORMULA_ERROR_SENTINEL)
    }
}

impl ValueNormalizer {
    #[must_use]
    pub fn new(error_sentinel: impl Into<String>) -> Self {
        Self {
            error_sentinel: error_sentinel.into(),
        }
    }

    /// Normalize one cell of the column titled `title`.
    #[must_use]
    pub fn normalize(&self, raw: Option<&str>, title: &str) -> NormalizedValue {
        let Some(raw) = raw else {
            return NormalizedValue::Missing;
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == self.error_sentinel {
            return NormalizedValue::Missing;
        }

        if is_date_column(title) {
            parse_date(trimmed)
        } else if is_numeric_column(title) {
            parse_number(trimmed).map_or_else(
                || NormalizedValue::Text(trimmed.to_string()),
                NormalizedValue::Number,
            )
        } else {
            NormalizedValue::Text(trimmed.to_string())
        }
    }
}

#[must_use]
pub fn is_date_column(title: &str) -> bool {
    title.to_lowercase().contains("date")
}

#[must_use]
pub fn is_numeric_column(title: &str) -> bool {
    let lower = title.to_lowercase();
    NUMERIC_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Parse trimmed text as a date, falling back to `Text`.
#[must_use]
pub fn parse_date(text: &str) -> NormalizedValue {
    if ISO_DATE_PREFIX.is_match(text) {
        if let Some(prefix) = text.get(..10) {
            return NormalizedValue::Date(prefix.to_string());
        }
    }

    if let Some(caps) = DAY_FIRST_DATE.captures(text) {
        let day = caps[1].parse::<u32>().ok();
        let month = caps[2].parse::<u32>().ok();
        let year = caps[3].parse::<i32>().ok();
        if let (Some(day), Some(month), Some(year)) = (day, month, year) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return NormalizedValue::Date(date.format("%Y-%m-%d").to_string());
            }
        }
    }

    NormalizedValue::Text(text.to_string())
}

/// Strip currency symbols, separators, and whitespace, then parse as `f64`.
///
/// Returns `None` for anything that is not a finite number afterwards.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != ',' && !CURRENCY_SYMBOLS.contains(ch))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}
