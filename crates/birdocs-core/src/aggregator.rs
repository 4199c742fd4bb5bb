//! Aggregator: per-source record sequences into one combined sequence.

use std::collections::BTreeMap;

use crate::types::{CanonicalRecord, SourceKind};

/// Combined and per-source views of one run's records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    /// Rulings, then RDAOs, then PDFs; each in original order.
    pub combined: Vec<CanonicalRecord>,
    pub by_source: BTreeMap<SourceKind, Vec<CanonicalRecord>>,
}

impl Aggregate {
    /// Records of one source, empty when the source produced none.
    pub fn source(&self, kind: SourceKind) -> &[CanonicalRecord] {
        self.by_source.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Concatenate per-source records in the fixed source order.
///
/// Keying by [`SourceKind`] makes the order independent of how the map was
/// filled.
pub fn aggregate(per_source: BTreeMap<SourceKind, Vec<CanonicalRecord>>) -> Aggregate {
    let combined = per_source.values().flatten().cloned().collect();
    Aggregate {
        combined,
        by_source: per_source,
    }
}
