use chrono::Datelike;

use super::{resolve_link, Adapter, Link, TableRow};
use crate::config::SourceProfile;
use crate::issue::IssueKind;
use crate::normalizer::{
    collapse_ws, normalize_date, normalize_title, parse_date, parse_document_number, year_of,
};
use crate::types::{PartialRecord, SourceKind};

const ISSUANCE: usize = 0;
const SUBJECT: usize = 1;
const DATE: usize = 2;

/// Revenue Delegation Authority Orders: one table row per order.
///
/// Row layout is positional: issuance (title and number), subject matter
/// with the PDF links, then the issue date.
#[derive(Debug, Clone)]
pub struct RdaoAdapter {
    profile: SourceProfile,
}

impl RdaoAdapter {
    pub fn new(profile: SourceProfile) -> Self {
        Self { profile }
    }
}

impl Adapter for RdaoAdapter {
    type Entry = TableRow;

    fn kind(&self) -> SourceKind {
        SourceKind::Rdao
    }

    fn adapt_entry(
        &self,
        row: &TableRow,
        warnings: &mut Vec<IssueKind>,
    ) -> Result<PartialRecord, IssueKind> {
        if row.cells.len() <= DATE {
            return Err(IssueKind::MalformedSourcePayload {
                reason: format!("expected at least 3 cells, found {}", row.cells.len()),
            });
        }

        let issuance_text = row.cells[ISSUANCE].visible_text();
        let issuance = collapse_ws(&issuance_text);
        let parsed = parse_document_number(&issuance, SourceKind::Rdao);
        let number_normalized = parsed.is_some();
        let document_number = parsed.unwrap_or_else(|| issuance.clone());

        let date_text = collapse_ws(&row.cells[DATE].visible_text());
        let document_date = normalize_date(&date_text);
        if document_date.is_none() && !date_text.is_empty() {
            warnings.push(IssueKind::UnparseableDate { raw: date_text.clone() });
        }

        let year = year_of(&document_number)
            .or_else(|| parse_date(&date_text).map(|d| d.year()));

        let subject = &row.cells[SUBJECT].text;
        let subject_matter = (!subject.trim().is_empty()).then(|| subject.clone());

        let href = full_text_link(row)
            .map(|link| link.href.as_str())
            .unwrap_or_default();

        Ok(PartialRecord {
            title: normalize_title(&issuance_text, SourceKind::Rdao),
            document_number,
            number_normalized,
            document_date,
            year,
            subject_matter,
            document_type: self.profile.document_type.clone(),
            category: self.profile.category.clone(),
            pdf_url: resolve_link(href, self.profile.source_url.as_deref()),
            source_url: self.profile.source_url.clone(),
        })
    }
}

/// The subject cell's "full text" link, else its last link, else any
/// link in the row.
fn full_text_link(row: &TableRow) -> Option<&Link> {
    let subject = &row.cells[SUBJECT].links;
    subject
        .iter()
        .find(|link| mentions_full(link))
        .or_else(|| subject.last())
        .or_else(|| row.cells.iter().flat_map(|cell| cell.links.iter()).last())
}

fn mentions_full(link: &Link) -> bool {
    link.title
        .as_deref()
        .is_some_and(|t| t.to_lowercase().contains("full"))
        || link.text.to_lowercase().contains("full")
}
