use std::path::PathBuf;

use birdocs_core::export::ExportFormat;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "birdocs",
    about = "Normalize BIR rulings, RDAOs and PDFs into one table"
)]
pub struct Cli {
    /// Extra TOML config layered over the defaults and the user config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Saved legal-rulings dataset response (JSON).
    #[arg(long)]
    pub rulings: Option<PathBuf>,

    /// Saved RDAO dataset response (JSON).
    #[arg(long)]
    pub rdao: Option<PathBuf>,

    /// Standalone PDF URL; repeatable. Replaces `sources.pdf.urls`.
    #[arg(long = "pdf-url")]
    pub pdf_urls: Vec<String>,

    /// Output directory.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format: csv, tsv or jsonl.
    #[arg(long)]
    pub format: Option<ExportFormat>,

    /// Write document numbers as plain cells instead of `="…"` text formulas.
    #[arg(long)]
    pub no_text_guard: bool,

    /// Log at debug level.
    #[arg(long)]
    pub debug: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
