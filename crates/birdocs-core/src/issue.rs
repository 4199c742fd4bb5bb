//! Per-record issues collected alongside successful records.
//!
//! Nothing here aborts a batch. Adapters and the unifier push an [`Issue`]
//! for every entry they skip or flag, and the caller reports them.

use thiserror::Error;

use crate::types::SourceKind;

/// What went wrong with a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueKind {
    #[error("unparseable date {raw:?}; document_date left empty")]
    UnparseableDate { raw: String },
    #[error("no digits in document number {raw:?}; kept as-is")]
    UnparseableDocumentNumber { raw: String },
    #[error("no pdf url; record dropped")]
    MissingPdfUrl,
    #[error("malformed payload entry: {reason}")]
    MalformedSourcePayload { reason: String },
    #[error("document number {document_number:?} already seen for year {year}")]
    DuplicateDocumentNumber {
        document_number: String,
        year: String,
    },
}

impl IssueKind {
    /// Whether the entry was removed from the output.
    pub fn drops_record(&self) -> bool {
        matches!(
            self,
            IssueKind::MissingPdfUrl | IssueKind::MalformedSourcePayload { .. }
        )
    }
}

/// An [`IssueKind`] located at one entry of one source's payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source_kind} entry {index}: {kind}")]
pub struct Issue {
    pub source_kind: SourceKind,
    /// Position of the entry in the source payload.
    pub index: usize,
    pub kind: IssueKind,
}

impl Issue {
    pub fn new(source_kind: SourceKind, index: usize, kind: IssueKind) -> Self {
        Self {
            source_kind,
            index,
            kind,
        }
    }
}
