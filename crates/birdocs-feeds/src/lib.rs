//! birdocs-feeds — payload readers for the three BIR sources.
//!
//! Each reader takes a saved CMS dataset response (the JSON served under
//! `/api/pub/templates/<id>/datasets`), finds the HTML it embeds, and hands
//! the core an already-parsed [`SourcePayload`]. Retrieval itself is out of
//! scope; payloads come from files on disk.

pub mod dataset;
pub mod rdao;
pub mod rulings;

use std::path::{Path, PathBuf};

use birdocs_core::SourcePayload;
use thiserror::Error;

pub use dataset::Dataset;

/// Failure to obtain a payload at all. Per-entry problems are not errors;
/// the core reports those as issues.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a dataset response: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

async fn read_dataset(path: &Path) -> Result<Dataset, FeedError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let dataset = Dataset::from_json(&text).map_err(|source| FeedError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), items = dataset.data.len(), "dataset loaded");
    Ok(dataset)
}

/// Load a saved rulings dataset.
pub async fn load_rulings(path: &Path) -> Result<SourcePayload, FeedError> {
    let dataset = read_dataset(path).await?;
    Ok(SourcePayload::Ruling(rulings::ruling_entries(&dataset)))
}

/// Load a saved RDAO dataset.
pub async fn load_rdao(path: &Path) -> Result<SourcePayload, FeedError> {
    let dataset = read_dataset(path).await?;
    Ok(SourcePayload::Rdao(rdao::table_rows(&dataset)))
}

/// Standalone PDF URLs need no parsing.
pub fn pdf_payload(urls: &[String]) -> SourcePayload {
    SourcePayload::Pdf(urls.to_vec())
}

/// Collapse whitespace runs into single spaces and trim.
pub(crate) fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
