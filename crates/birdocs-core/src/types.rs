//! Core types for birdocs-core.
//!
//! This module defines the data structures shared across all pipeline
//! stages: the unified [`CanonicalRecord`], the adapter-side
//! [`PartialRecord`], and the [`SourceKind`] discriminant.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A unified document row produced by the schema unifier.
///
/// Every optional field absent at the source stays `None`; there is no
/// placeholder text. Records are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalRecord {
    /// Human-readable title, phrased per document type.
    pub title: String,
    /// Canonical identifier (`001-2025`, `35-2024`, `10963`, …).
    pub document_number: String,
    /// Issue date as `YYYY-MM-DD`.
    pub document_date: Option<String>,
    /// Four-digit year, from the document number or the date.
    pub year: Option<i32>,
    /// Free-text description, passed through unmodified.
    pub subject_matter: Option<String>,
    pub document_type: Option<String>,
    pub category: Option<String>,
    /// Link to the document itself. Never empty.
    pub pdf_url: String,
    /// Listing page the document was found on.
    pub source_url: Option<String>,
    /// Run-wide capture time, assigned by the unifier.
    pub scraped_at: DateTime<Utc>,
}

impl CanonicalRecord {
    /// Column names in output order.
    pub const COLUMNS: [&'static str; 10] = [
        "title",
        "document_number",
        "document_date",
        "year",
        "subject_matter",
        "document_type",
        "category",
        "pdf_url",
        "source_url",
        "scraped_at",
    ];

    /// Render the record as one text cell per [`COLUMNS`](Self::COLUMNS)
    /// entry. Absent fields become empty cells.
    pub fn cells(&self) -> [String; 10] {
        [
            self.title.clone(),
            self.document_number.clone(),
            self.document_date.clone().unwrap_or_default(),
            self.year.map(|y| y.to_string()).unwrap_or_default(),
            self.subject_matter.clone().unwrap_or_default(),
            self.document_type.clone().unwrap_or_default(),
            self.category.clone().unwrap_or_default(),
            self.pdf_url.clone(),
            self.source_url.clone().unwrap_or_default(),
            format_timestamp(&self.scraped_at),
        ]
    }
}

/// RFC 3339 with second precision and a `Z` suffix.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Adapter output for one document, before unification.
///
/// `pdf_url` may still be empty here; the unifier is the gate that drops
/// such records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    pub title: String,
    pub document_number: String,
    /// `false` when the document number normalizer found no digits and the
    /// raw text was kept.
    pub number_normalized: bool,
    pub document_date: Option<String>,
    pub year: Option<i32>,
    pub subject_matter: Option<String>,
    pub document_type: Option<String>,
    pub category: Option<String>,
    pub pdf_url: String,
    pub source_url: Option<String>,
}

/// Which data source produced a record.
///
/// The derived ordering is the combined-output ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Ruling,
    Rdao,
    Pdf,
}

impl SourceKind {
    /// All kinds, in combined-output order.
    pub const ALL: [SourceKind; 3] = [SourceKind::Ruling, SourceKind::Rdao, SourceKind::Pdf];

    /// Document type label used when an adapter supplies none.
    pub fn default_document_type(self) -> Option<&'static str> {
        match self {
            SourceKind::Ruling => Some("BIR Ruling"),
            SourceKind::Rdao => Some("Revenue Delegation Authority Order"),
            SourceKind::Pdf => None,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Ruling => write!(f, "ruling"),
            SourceKind::Rdao => write!(f, "rdao"),
            SourceKind::Pdf => write!(f, "pdf"),
        }
    }
}
