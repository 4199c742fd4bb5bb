//! birdocs — BIR legal-document metadata, normalized into one table.
//!
//! Reads saved dataset responses for three sources (legal rulings, RDAOs,
//! standalone PDFs), normalizes them through `birdocs-core`, and writes one
//! file per source plus a combined file.
//!
//! # Architecture
//!
//! ```text
//! feeds (load, parse HTML) ──► core (adapt, unify, aggregate) ──► export
//! ```
//!
//! Payload files are loaded concurrently; normalization itself is
//! synchronous and runs once every payload is in memory.

pub mod cli;

use anyhow::Context;
use birdocs_core::config::Config;
use birdocs_core::{export, RunReport, SourceKind, SourcePayload};
use chrono::Utc;

use crate::cli::Cli;

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(dir) = &cli.out {
        config.output.dir = dir.clone();
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.no_text_guard {
        config.output.excel_text_guard = false;
    }
    if !cli.pdf_urls.is_empty() {
        config.sources.pdf.urls = cli.pdf_urls.clone();
    }
    config
}

/// Load every payload the command line points at, concurrently.
pub async fn load_payloads(cli: &Cli, config: &Config) -> anyhow::Result<Vec<SourcePayload>> {
    let rulings = async {
        match &cli.rulings {
            Some(path) => birdocs_feeds::load_rulings(path).await.map(Some),
            None => Ok(None),
        }
    };
    let rdao = async {
        match &cli.rdao {
            Some(path) => birdocs_feeds::load_rdao(path).await.map(Some),
            None => Ok(None),
        }
    };
    let (rulings, rdao) = tokio::try_join!(rulings, rdao)?;

    let mut payloads: Vec<SourcePayload> = [rulings, rdao].into_iter().flatten().collect();
    if !config.sources.pdf.urls.is_empty() {
        payloads.push(birdocs_feeds::pdf_payload(&config.sources.pdf.urls));
    }
    Ok(payloads)
}

/// Run the whole job for parsed arguments. Returns the report for printing.
pub async fn run(cli: &Cli) -> anyhow::Result<(RunReport, Vec<std::path::PathBuf>)> {
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let config = apply_overrides(config, cli);

    let payloads = load_payloads(cli, &config).await?;
    if payloads.is_empty() {
        anyhow::bail!("nothing to do: pass --rulings, --rdao or --pdf-url (or configure sources.pdf.urls)");
    }

    let captured_at = Utc::now();
    tracing::info!(payloads = payloads.len(), %captured_at, "normalizing");
    let report = birdocs_core::run(&payloads, &config, captured_at);

    let written = export::write_outputs(&report.aggregate, &config)
        .with_context(|| format!("writing output to {}", config.output.dir.display()))?;
    Ok((report, written))
}

/// Human-readable run summary.
pub fn summary(report: &RunReport, written: &[std::path::PathBuf]) -> String {
    let mut out = String::new();
    out.push_str("SUMMARY\n");
    for kind in SourceKind::ALL {
        let label = match kind {
            SourceKind::Ruling => "Legal Rulings",
            SourceKind::Rdao => "RDAO Orders",
            SourceKind::Pdf => "PDF Documents",
        };
        out.push_str(&format!(
            "  {:<15} {} documents\n",
            format!("{label}:"),
            report.aggregate.source(kind).len()
        ));
    }
    out.push_str(&format!(
        "  {:<15} {} documents\n",
        "TOTAL:",
        report.aggregate.combined.len()
    ));
    if !report.issues.is_empty() {
        out.push_str(&format!(
            "Issues: {} ({} dropped)\n",
            report.issues.len(),
            report.dropped()
        ));
        for issue in &report.issues {
            out.push_str(&format!("  - {issue}\n"));
        }
    }
    if !written.is_empty() {
        out.push_str("Output files:\n");
        for path in written {
            out.push_str(&format!("  - {}\n", path.display()));
        }
    }
    out
}
