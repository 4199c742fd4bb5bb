//! Test builders: ergonomic constructors for canonical and partial records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use birdocs_core::{CanonicalRecord, PartialRecord};
use chrono::{DateTime, Utc};

use super::fixtures::captured_at;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`CanonicalRecord`] fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::ruling("018-2025")
///     .pdf_url("https://x.test/018-2025.pdf")
///     .build();
/// ```
pub struct RecordBuilder {
    record: CanonicalRecord,
}

impl RecordBuilder {
    pub fn new(title: impl Into<String>, document_number: impl Into<String>) -> Self {
        let document_number = document_number.into();
        Self {
            record: CanonicalRecord {
                title: title.into(),
                pdf_url: format!("https://x.test/{document_number}.pdf"),
                document_number,
                document_date: None,
                year: None,
                subject_matter: None,
                document_type: None,
                category: None,
                source_url: None,
                scraped_at: captured_at(),
            },
        }
    }

    /// A ruling record with the canonical title and year filled in.
    pub fn ruling(document_number: &str) -> Self {
        let year = document_number
            .rsplit('-')
            .next()
            .and_then(|y| y.parse().ok());
        Self::new(format!("BIR Ruling No. {document_number}"), document_number)
            .year(year)
            .document_type("BIR Ruling")
    }

    pub fn year(mut self, year: Option<i32>) -> Self {
        self.record.year = year;
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.record.document_date = Some(date.to_string());
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.record.subject_matter = Some(subject.to_string());
        self
    }

    pub fn document_type(mut self, document_type: &str) -> Self {
        self.record.document_type = Some(document_type.to_string());
        self
    }

    pub fn pdf_url(mut self, url: &str) -> Self {
        self.record.pdf_url = url.to_string();
        self
    }

    pub fn scraped_at(mut self, ts: DateTime<Utc>) -> Self {
        self.record.scraped_at = ts;
        self
    }

    pub fn build(self) -> CanonicalRecord {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Partial records
// ---------------------------------------------------------------------------

/// A normalized partial record with only a number and a link.
pub fn partial(document_number: &str, pdf_url: &str) -> PartialRecord {
    PartialRecord {
        title: document_number.to_string(),
        document_number: document_number.to_string(),
        number_normalized: true,
        pdf_url: pdf_url.to_string(),
        ..PartialRecord::default()
    }
}
