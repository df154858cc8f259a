//! Large-number abbreviation for rendered amounts.
//!
//! Thresholds follow the Indian numbering system:
//!
//! | Magnitude        | Divisor      | Suffix |
//! |------------------|--------------|--------|
//! | ≥ 1,00,00,000    | 10,000,000   | `Cr`   |
//! | ≥ 1,00,000       | 100,000      | `L`    |
//! | ≥ 1,000          | 1,000        | `K`    |
//!
//! Abbreviated values carry two decimals. Smaller magnitudes print in their
//! canonical form.

const SCALES: &[(f64, &str)] = &[(10_000_000.0, "Cr"), (100_000.0, "L"), (1_000.0, "K")];

/// Abbreviate `value` when its magnitude reaches a threshold.
#[must_use]
pub fn abbreviate(value: f64) -> String {
    let magnitude = value.abs();
    for (divisor, suffix) in SCALES {
        if magnitude >= *divisor {
            return format!("{:.2}{suffix}", value / divisor);
        }
    }
    value.to_string()
}
