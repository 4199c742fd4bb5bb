use std::sync::OnceLock;

use regex::Regex;

use super::{digit_runs, file_stem, number_with_year, zero_pad};
use crate::types::SourceKind;

const RULING_WIDTH: usize = 3;

/// Canonical document number for `raw`, or the raw text itself when it
/// holds no digits at all.
///
/// Use [`parse_document_number`] to tell the two outcomes apart.
pub fn normalize_document_number(raw: &str, kind: SourceKind) -> String {
    parse_document_number(raw, kind).unwrap_or_else(|| raw.to_string())
}

/// Canonical document number, or `None` when `raw` has no digits.
///
/// | kind   | output        | example input                | output     |
/// |--------|---------------|------------------------------|------------|
/// | Ruling | `NNN-YYYY`    | `BIR-RULING-001-2025.pdf`    | `001-2025` |
/// | Rdao   | `N-YYYY`      | `RDAO No. 35-2024`           | `35-2024`  |
/// | Pdf    | leading id    | `RA-10963-RRD.pdf`           | `10963`    |
///
/// Without a year token, Ruling and Rdao fall back to the number alone.
pub fn parse_document_number(raw: &str, kind: SourceKind) -> Option<String> {
    match kind {
        SourceKind::Ruling => numbered(raw, RULING_WIDTH),
        SourceKind::Rdao => numbered(raw, 0),
        SourceKind::Pdf => leading_identifier(raw),
    }
}

/// Year suffix of a canonical `N-YYYY` document number.
pub fn year_of(document_number: &str) -> Option<i32> {
    number_with_year(document_number).and_then(|(_, year)| year.parse().ok())
}

fn numbered(raw: &str, width: usize) -> Option<String> {
    if let Some((number, year)) = number_with_year(raw) {
        return Some(format!("{}-{}", zero_pad(number, width), year));
    }
    // A lone four-digit run is more likely a stray year than the number.
    let runs: Vec<&str> = digit_runs(raw).collect();
    let number = runs
        .iter()
        .rev()
        .find(|run| run.len() != 4)
        .or_else(|| runs.last())?;
    Some(zero_pad(number, width))
}

fn prefixed_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z]+[\s_\-]*([0-9]+)").expect("prefixed id pattern is valid")
    })
}

fn leading_identifier(raw: &str) -> Option<String> {
    let stem = file_stem(raw);
    if let Some(caps) = prefixed_id_re().captures(stem) {
        return caps.get(1).map(|m| m.as_str().to_string());
    }
    digit_runs(stem).next().map(str::to_string)
}
