use super::Adapter;
use crate::issue::IssueKind;
use crate::normalizer::{normalize_title, parse_document_number};
use crate::types::{PartialRecord, SourceKind};

/// Standalone PDFs: the URL is all there is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfAdapter;

impl Adapter for PdfAdapter {
    type Entry = String;

    fn kind(&self) -> SourceKind {
        SourceKind::Pdf
    }

    fn adapt_entry(
        &self,
        url: &String,
        _warnings: &mut Vec<IssueKind>,
    ) -> Result<PartialRecord, IssueKind> {
        let url = url.trim();
        let parsed = parse_document_number(url, SourceKind::Pdf);
        Ok(PartialRecord {
            title: normalize_title(url, SourceKind::Pdf),
            number_normalized: parsed.is_some(),
            document_number: parsed.unwrap_or_else(|| url.to_string()),
            pdf_url: url.to_string(),
            ..PartialRecord::default()
        })
    }
}
