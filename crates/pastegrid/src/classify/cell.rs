//! Per-cell predicates used by column type inference.

use once_cell::sync::Lazy;
use regex::Regex;

use super::locale::NumericLocale;

// Numeric-looking codes ("007", zip codes) stay text.
static LEADING_ZERO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0\d").unwrap());

/// Trim and turn non-breaking spaces into ordinary spaces.
pub fn clean_cell(raw: &str) -> String {
    raw.trim().replace('\u{00A0}', " ")
}

/// A cell is blank (missing) iff its trimmed text is empty.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Whether the cell contains any ASCII digit.
pub fn looks_numeric(raw: &str) -> bool {
    raw.bytes().any(|b| b.is_ascii_digit())
}

/// Parse a cell as a finite number under `locale`.
///
/// Returns `None` for blanks, leading-zero codes and anything that does not
/// parse after separator normalization.
pub fn parse_number(raw: &str, locale: NumericLocale) -> Option<f64> {
    let normalized = locale.normalize(raw.trim());
    if normalized.is_empty() || LEADING_ZERO.is_match(&normalized) {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// True if the cell reads as a finite number under `locale`.
pub fn is_numeric(raw: &str, locale: NumericLocale) -> bool {
    parse_number(raw, locale).is_some()
}

/// True if the cell is numeric with no fractional part and fits an `i64`.
pub fn is_integer(raw: &str, locale: NumericLocale) -> bool {
    parse_number(raw, locale).is_some_and(fits_i64)
}

/// True if the cell spells `true` or `false`, ignoring case and padding.
pub fn is_boolean(raw: &str) -> bool {
    let lowered = raw.trim().to_lowercase();
    lowered == "true" || lowered == "false"
}

pub(crate) fn fits_i64(value: f64) -> bool {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64
}
