//! Field parsing utilities for hike sheet rows
//!
//! Every parser here is total: it returns a default or `None` rather than an
//! error, because the sheet is edited by hand and a bad cell must never stop
//! a refresh.

use crate::app::models::HikeYear;
use crate::constants::{TWO_DIGIT_YEAR_PREFIX, UNKNOWN_LOCATION};
use regex::Regex;
use std::sync::LazyLock;

/// Leading optionally-signed integer, as a lenient spreadsheet integer parse
///
/// Digits are ASCII only: a trailing full-width or Arabic-Indic digit ends
/// the number instead of being swallowed into it.
static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").expect("valid integer regex"));

/// Leading optionally-signed decimal number, ASCII digits only
static LEADING_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").expect("valid decimal regex")
});

/// Parse the hike number from the id cell
///
/// Takes the leading digit run (`"12b"` is hike 12). Returns `None` for
/// blank cells, cells without leading digits, zero, negative numbers and
/// values too large to represent.
pub fn parse_hike_id(raw: &str) -> Option<u64> {
    let caps = LEADING_INTEGER.captures(raw)?;
    if &caps[1] == "-" {
        return None;
    }
    caps[2].parse::<u64>().ok().filter(|id| *id > 0)
}

/// Extract the year from a free-form `M/D/Y` date
///
/// Two-digit years are assumed to be 20xx. Tokens longer than four
/// characters keep their last four. Anything else is `Unknown`.
pub fn extract_year(date: &str) -> HikeYear {
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return HikeYear::Unknown;
    }

    let token = parts[2].trim();
    let len = token.chars().count();
    let candidate: String = if len == 2 {
        format!("{}{}", TWO_DIGIT_YEAR_PREFIX, token)
    } else if len > 4 {
        token.chars().skip(len - 4).collect()
    } else {
        token.to_string()
    };

    HikeYear::from_token(&candidate)
}

/// Clean a numeric cell: drop thousands separators, read the leading number
///
/// Returns 0 for missing or empty cells and for cells that do not start with
/// a number (`"about 5"` is 0, `"1,234.5 ft"` is 1234.5).
pub fn clean_numeric(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let without_commas = raw.replace(',', "");
    let cleaned = without_commas.trim();
    if cleaned.is_empty() {
        return 0.0;
    }

    LEADING_DECIMAL
        .find(cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Clean a measure cell and clamp it to the non-negative range
pub fn clean_measure(raw: Option<&str>) -> f64 {
    clean_numeric(raw).max(0.0)
}

/// Text field or empty string
pub fn text_field(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

/// Location field, `Unknown` when absent or empty
pub fn location_field(row: &[String], index: usize) -> String {
    match row.get(index) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => UNKNOWN_LOCATION.to_string(),
    }
}
