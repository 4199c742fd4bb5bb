//! Schema unifier: adapter output into [`CanonicalRecord`]s.
//!
//! This is the one hard validation gate: a partial record without a
//! `pdf_url` never becomes a canonical record. Everything else is filled
//! in, with absent fields left as `None`.
//!
//! `captured_at` is passed in rather than read from the clock, so every
//! record of a run carries the same `scraped_at` and the output is
//! reproducible.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::adapter::AdapterOutput;
use crate::issue::{Issue, IssueKind};
use crate::types::{CanonicalRecord, PartialRecord, SourceKind};

/// Build the canonical record for one partial record.
pub fn unify(
    partial: PartialRecord,
    kind: SourceKind,
    captured_at: DateTime<Utc>,
) -> Result<CanonicalRecord, IssueKind> {
    if partial.pdf_url.trim().is_empty() {
        return Err(IssueKind::MissingPdfUrl);
    }

    let document_type = partial
        .document_type
        .or_else(|| kind.default_document_type().map(str::to_string));

    Ok(CanonicalRecord {
        title: partial.title,
        document_number: partial.document_number,
        document_date: partial.document_date,
        year: partial.year,
        subject_matter: partial.subject_matter,
        document_type,
        category: partial.category,
        pdf_url: partial.pdf_url,
        source_url: partial.source_url,
        scraped_at: captured_at,
    })
}

/// Options for [`unify_batch`].
#[derive(Debug, Clone, Copy)]
pub struct UnifyOptions {
    pub captured_at: DateTime<Utc>,
    /// Report repeated document numbers within (source, year).
    pub report_duplicates: bool,
}

/// Records and issues from unifying one adapter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedBatch {
    pub source_kind: SourceKind,
    pub records: Vec<CanonicalRecord>,
    pub issues: Vec<Issue>,
}

/// Unify a whole adapter output, carrying its issues forward and adding
/// the unifier's own: unnormalized numbers, missing links, duplicates.
pub fn unify_batch(output: AdapterOutput, opts: UnifyOptions) -> UnifiedBatch {
    let kind = output.source_kind;
    let mut issues = output.issues;
    let mut records = Vec::with_capacity(output.records.len());
    let mut seen: HashSet<(Option<i32>, String)> = HashSet::new();

    for adapted in output.records {
        let index = adapted.index;
        let number_normalized = adapted.record.number_normalized;

        let record = match unify(adapted.record, kind, opts.captured_at) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(source = %kind, index, "{err}");
                issues.push(Issue::new(kind, index, err));
                continue;
            }
        };

        if !number_normalized {
            let kind_issue = IssueKind::UnparseableDocumentNumber {
                raw: record.document_number.clone(),
            };
            tracing::warn!(source = %kind, index, "{kind_issue}");
            issues.push(Issue::new(kind, index, kind_issue));
        }

        if opts.report_duplicates
            && !seen.insert((record.year, record.document_number.clone()))
        {
            let dup = IssueKind::DuplicateDocumentNumber {
                document_number: record.document_number.clone(),
                year: record.year.map(|y| y.to_string()).unwrap_or_default(),
            };
            tracing::warn!(source = %kind, index, "{dup}");
            issues.push(Issue::new(kind, index, dup));
        }

        records.push(record);
    }

    issues.sort_by_key(|issue| issue.index);
    tracing::debug!(source = %kind, records = records.len(), issues = issues.len(), "unified");
    UnifiedBatch {
        source_kind: kind,
        records,
        issues,
    }
}
