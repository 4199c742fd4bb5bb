//! Domain-specific assertion macros for birdocs harnesses.
//!
//! These wrap `pretty_assertions` and name the record invariant that was
//! violated, plus the offending record.

/// Assert that no cell of a canonical record holds a textual placeholder.
///
/// ```rust
/// assert_no_placeholder!(record);
/// ```
#[macro_export]
macro_rules! assert_no_placeholder {
    ($record:expr) => {{
        let record: &birdocs_core::CanonicalRecord = &$record;
        for (column, cell) in birdocs_core::CanonicalRecord::COLUMNS
            .iter()
            .zip(record.cells().iter())
        {
            let upper = cell.trim().to_ascii_uppercase();
            if upper == "N/A" || upper == "NONE" || upper == "NULL" {
                panic!(
                    "assert_no_placeholder! failed: column {:?} holds placeholder {:?}\n  record: {:#?}",
                    column, cell, record
                );
            }
        }
    }};
}

/// Assert that a record made it through the unifier's gate: it has a link
/// and a capture timestamp.
#[macro_export]
macro_rules! assert_deliverable {
    ($record:expr) => {{
        let record: &birdocs_core::CanonicalRecord = &$record;
        if record.pdf_url.trim().is_empty() {
            panic!("assert_deliverable! failed: empty pdf_url\n  record: {:#?}", record);
        }
        if birdocs_core::types::format_timestamp(&record.scraped_at).is_empty() {
            panic!("assert_deliverable! failed: empty scraped_at\n  record: {:#?}", record);
        }
    }};
}

/// Assert that a title is in the canonical ruling phrasing with a
/// zero-padded number.
#[macro_export]
macro_rules! assert_canonical_ruling_title {
    ($title:expr) => {{
        let title: &str = &$title;
        let rest = title.strip_prefix("BIR Ruling No. ").unwrap_or_else(|| {
            panic!("assert_canonical_ruling_title! failed: {:?} lacks the prefix", title)
        });
        let (number, year) = rest.rsplit_once('-').unwrap_or_else(|| {
            panic!("assert_canonical_ruling_title! failed: {:?} has no year", title)
        });
        if number.len() < 3 || !number.bytes().all(|b| b.is_ascii_digit()) {
            panic!(
                "assert_canonical_ruling_title! failed: number {:?} in {:?} is not padded to 3 digits",
                number, title
            );
        }
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            panic!("assert_canonical_ruling_title! failed: year {:?} in {:?}", year, title);
        }
    }};
}
