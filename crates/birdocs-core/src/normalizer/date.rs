use chrono::{Datelike, NaiveDate};

use super::collapse_ws;

/// Accepted input layouts, tried in order. The last one is the output
/// layout, which keeps [`normalize_date`] idempotent.
const DATE_FORMATS: &[&str] = &[
    "%B %d, %Y", // December 19, 2024 / November 7, 2024
    "%B %d,%Y",  // December 19,2024
    "%b %d, %Y", // Dec 19, 2024
    "%m/%d/%Y",  // 12/19/2024
    "%Y-%m-%d",
];

/// Four-digit years only; `%Y` alone accepts `24` as year 24.
const YEARS: std::ops::RangeInclusive<i32> = 1000..=9999;

/// Parse a listing date. Returns `None` when no known layout matches.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let collapsed = collapse_ws(raw);
    if collapsed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&collapsed, fmt).ok())
        .filter(|date| YEARS.contains(&date.year()))
}

/// Normalise a listing date to `YYYY-MM-DD`.
pub fn normalize_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|date| date.format("%Y-%m-%d").to_string())
}
