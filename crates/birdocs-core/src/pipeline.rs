//! One normalization run: payloads in, aggregate and issues out.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::adapter::{AdapterOutput, Adapters, SourcePayload};
use crate::aggregator::{aggregate, Aggregate};
use crate::config::Config;
use crate::issue::Issue;
use crate::types::SourceKind;
use crate::unifier::{unify_batch, UnifyOptions};

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub captured_at: DateTime<Utc>,
    pub aggregate: Aggregate,
    /// Skipped and flagged entries, grouped by source in combined order.
    pub issues: Vec<Issue>,
}

impl RunReport {
    /// Number of records that did not make it into the output.
    pub fn dropped(&self) -> usize {
        self.issues.iter().filter(|i| i.kind.drops_record()).count()
    }
}

/// Adapt, unify and aggregate every payload.
///
/// Payloads of the same kind are concatenated in the order given and
/// unified as one batch, so entry indices and the duplicate check span all
/// of them.
pub fn run(payloads: &[SourcePayload], config: &Config, captured_at: DateTime<Utc>) -> RunReport {
    let adapters = Adapters::from_config(config);
    let opts = UnifyOptions {
        captured_at,
        report_duplicates: config.validation.report_duplicates,
    };

    let mut adapted: BTreeMap<SourceKind, (AdapterOutput, usize)> = BTreeMap::new();
    for payload in payloads {
        let output = adapters.adapt(payload);
        let (merged, entries) = adapted.entry(payload.kind()).or_insert_with(|| {
            (
                AdapterOutput {
                    source_kind: payload.kind(),
                    records: Vec::new(),
                    issues: Vec::new(),
                },
                0,
            )
        });
        let offset = *entries;
        merged.records.extend(output.records.into_iter().map(|mut a| {
            a.index += offset;
            a
        }));
        merged.issues.extend(output.issues.into_iter().map(|mut i| {
            i.index += offset;
            i
        }));
        *entries += payload.len();
    }

    let mut per_source = BTreeMap::new();
    let mut issues = Vec::new();
    for (kind, (output, entries)) in adapted {
        let batch = unify_batch(output, opts);
        tracing::info!(
            source = %kind,
            entries,
            records = batch.records.len(),
            issues = batch.issues.len(),
            "source normalized"
        );
        per_source.insert(kind, batch.records);
        issues.extend(batch.issues);
    }

    RunReport {
        captured_at,
        aggregate: aggregate(per_source),
        issues,
    }
}
