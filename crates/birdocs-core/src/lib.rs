//! birdocs-core — normalization and schema unification for BIR documents.
//!
//! This crate exposes the pipeline stages as public modules, plus the shared
//! types used across all stages.
//!
//! # Architecture
//!
//! ```text
//! payload ──► Adapter ──► Unifier ──► Aggregator ──► Export
//!               │
//!               └──► Normalizers (title, number, date)
//! ```
//!
//! Everything here is synchronous and side-effect free except [`export`].
//! Fetching and HTML parsing of the sources live in `birdocs-feeds`.

pub mod adapter;
pub mod aggregator;
pub mod config;
pub mod export;
pub mod issue;
pub mod normalizer;
pub mod pipeline;
pub mod types;
pub mod unifier;

pub use adapter::{Cell, Link, RulingEntry, SourcePayload, TableRow};
pub use aggregator::{aggregate, Aggregate};
pub use issue::{Issue, IssueKind};
pub use pipeline::{run, RunReport};
pub use types::{CanonicalRecord, PartialRecord, SourceKind};
pub use unifier::{unify, unify_batch};
