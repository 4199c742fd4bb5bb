//! Field normalizers: raw source strings into canonical values.
//!
//! Every function here is pure and total: malformed input degrades to the
//! trimmed raw text (titles, numbers) or `None` (dates), never an error.
//! Each normalizer is idempotent on its own output.

mod date;
mod number;
mod title;

pub use date::{normalize_date, parse_date};
pub use number::{normalize_document_number, parse_document_number, year_of};
pub use title::normalize_title;

use std::sync::OnceLock;

use regex::Regex;

/// `<number><sep><year>` where the year token is exactly four digits.
///
/// Separators are hyphens, en/em dashes and whitespace, in any amount.
pub(crate) fn number_year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([0-9]+)[\s\-\x{2013}\x{2014}]+([0-9]{4})(?:[^0-9]|$)")
            .expect("number/year pattern is valid")
    })
}

/// Split out the numeric component and year token adjacent to it.
pub(crate) fn number_with_year(raw: &str) -> Option<(&str, &str)> {
    let caps = number_year_re().captures(raw)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

pub(crate) fn digit_runs(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}

/// Left-pad a digit string with zeros to at least `width`.
pub(crate) fn zero_pad(digits: &str, width: usize) -> String {
    format!("{digits:0>width$}")
}

/// Collapse runs of whitespace into single spaces and trim.
pub(crate) fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Last path segment of a URL or path, without query, fragment or a
/// trailing `.pdf` extension.
pub(crate) fn file_stem(raw: &str) -> &str {
    let raw = raw.trim();
    let raw = raw.split(|c: char| c == '?' || c == '#').next().unwrap_or(raw);
    let name = raw.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(raw);
    match name.len().checked_sub(4) {
        Some(cut) if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".pdf") => {
            &name[..cut]
        }
        _ => name,
    }
}
