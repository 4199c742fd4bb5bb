//! Source adapters, one per [`SourceKind`], each turning an already-parsed
//! payload into [`PartialRecord`]s.
//!
//! Adapters are pure: no I/O, no shared state. A failure on one entry is
//! recorded as an [`Issue`] and the rest of the batch carries on.

mod pdf;
mod rdao;
mod ruling;

pub use pdf::PdfAdapter;
pub use rdao::RdaoAdapter;
pub use ruling::RulingAdapter;

use url::Url;

use crate::config::Config;
use crate::issue::{Issue, IssueKind};
use crate::types::{PartialRecord, SourceKind};

// ---------------------------------------------------------------------------
// Payload shapes
// ---------------------------------------------------------------------------

/// One ruling link as found in a rulings dataset item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulingEntry {
    /// HTML fragment holding the `<a href>` element.
    pub fragment: String,
    /// The dataset item's year label (`"2025"`, `"Year 2025"`, …).
    pub year_label: Option<String>,
}

/// A hyperlink pulled out of a table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub title: Option<String>,
    pub text: String,
}

/// One `<td>`: its text without link text, plus the links it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub links: Vec<Link>,
}

impl Cell {
    /// The cell's own text, or its link texts when it has nothing else.
    pub fn visible_text(&self) -> String {
        if !self.text.trim().is_empty() {
            return self.text.clone();
        }
        self.links
            .iter()
            .map(|link| link.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One `<tr>` of the RDAO table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<Cell>,
}

/// A complete payload for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePayload {
    Ruling(Vec<RulingEntry>),
    Rdao(Vec<TableRow>),
    /// Bare document URLs.
    Pdf(Vec<String>),
}

impl SourcePayload {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourcePayload::Ruling(_) => SourceKind::Ruling,
            SourcePayload::Rdao(_) => SourceKind::Rdao,
            SourcePayload::Pdf(_) => SourceKind::Pdf,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SourcePayload::Ruling(entries) => entries.len(),
            SourcePayload::Rdao(rows) => rows.len(),
            SourcePayload::Pdf(urls) => urls.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Adapter contract
// ---------------------------------------------------------------------------

/// A partial record tagged with the payload position it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapted {
    pub index: usize,
    pub record: PartialRecord,
}

/// Everything one adapter run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterOutput {
    pub source_kind: SourceKind,
    pub records: Vec<Adapted>,
    pub issues: Vec<Issue>,
}

/// Shared contract of the three source adapters.
pub trait Adapter {
    type Entry;

    fn kind(&self) -> SourceKind;

    /// Adapt one entry. Non-fatal findings go into `warnings`; an `Err`
    /// skips the entry.
    fn adapt_entry(
        &self,
        entry: &Self::Entry,
        warnings: &mut Vec<IssueKind>,
    ) -> Result<PartialRecord, IssueKind>;

    fn adapt(&self, entries: &[Self::Entry]) -> AdapterOutput {
        let kind = self.kind();
        let mut records = Vec::with_capacity(entries.len());
        let mut issues = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            let mut warnings = Vec::new();
            let outcome = self.adapt_entry(entry, &mut warnings);
            for warning in warnings {
                tracing::warn!(source = %kind, index, "{warning}");
                issues.push(Issue::new(kind, index, warning));
            }
            match outcome {
                Ok(record) => records.push(Adapted { index, record }),
                Err(kind_err) => {
                    tracing::warn!(source = %kind, index, "skipping entry: {kind_err}");
                    issues.push(Issue::new(kind, index, kind_err));
                }
            }
        }

        tracing::debug!(
            source = %kind,
            entries = entries.len(),
            adapted = records.len(),
            "adapter finished"
        );
        AdapterOutput {
            source_kind: kind,
            records,
            issues,
        }
    }
}

/// The fixed set of adapters, dispatched by payload variant.
#[derive(Debug, Clone)]
pub struct Adapters {
    pub ruling: RulingAdapter,
    pub rdao: RdaoAdapter,
    pub pdf: PdfAdapter,
}

impl Adapters {
    pub fn from_config(config: &Config) -> Self {
        Self {
            ruling: RulingAdapter::new(config.sources.ruling.clone()),
            rdao: RdaoAdapter::new(config.sources.rdao.clone()),
            pdf: PdfAdapter,
        }
    }

    pub fn adapt(&self, payload: &SourcePayload) -> AdapterOutput {
        match payload {
            SourcePayload::Ruling(entries) => self.ruling.adapt(entries),
            SourcePayload::Rdao(rows) => self.rdao.adapt(rows),
            SourcePayload::Pdf(urls) => self.pdf.adapt(urls),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers shared by the adapters
// ---------------------------------------------------------------------------

/// Resolve `href` against the listing page when it is relative.
pub(crate) fn resolve_link(href: &str, base: Option<&str>) -> String {
    let href = href.trim();
    if href.is_empty() || Url::parse(href).is_ok() {
        return href.to_string();
    }
    base.and_then(|b| Url::parse(b).ok())
        .and_then(|b| b.join(href).ok())
        .map(String::from)
        .unwrap_or_else(|| href.to_string())
}

/// First standalone four-digit run in `text`.
pub(crate) fn year_in(text: &str) -> Option<i32> {
    text.split(|c: char| !c.is_ascii_digit())
        .find(|run| run.len() == 4)
        .and_then(|run| run.parse().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
