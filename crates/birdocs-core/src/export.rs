//! Export: writes canonical records as CSV, TSV or JSONL.
//!
//! `document_number` must survive spreadsheet import unchanged (`001-2025`
//! is not a date, `007` is not 7). With the text guard on, delimited
//! output stores that column as an Excel text formula `="001-2025"`;
//! [`read_delimited`] strips the guard again so the value round-trips
//! byte-for-byte.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::aggregator::Aggregate;
use crate::config::Config;
use crate::types::{CanonicalRecord, SourceKind};

const DOCUMENT_NUMBER_COLUMN: usize = 1;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Jsonl,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Jsonl => "jsonl",
        }
    }

    fn delimiter(self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Jsonl => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            other => Err(format!("unknown export format {other:?} (csv, tsv, jsonl)")),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("delimited write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("json write failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub excel_text_guard: bool,
}

impl From<&Config> for ExportOptions {
    fn from(config: &Config) -> Self {
        Self {
            format: config.output.format,
            excel_text_guard: config.output.excel_text_guard,
        }
    }
}

/// Write a header row (delimited formats) and one row per record.
pub fn write_records<W: Write>(
    writer: W,
    records: &[CanonicalRecord],
    opts: ExportOptions,
) -> Result<(), ExportError> {
    match opts.format.delimiter() {
        Some(delimiter) => write_delimited(writer, records, delimiter, opts.excel_text_guard),
        None => write_jsonl(writer, records),
    }
}

fn write_delimited<W: Write>(
    writer: W,
    records: &[CanonicalRecord],
    delimiter: u8,
    guard: bool,
) -> Result<(), ExportError> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    out.write_record(CanonicalRecord::COLUMNS)?;
    for record in records {
        let mut cells = record.cells();
        if guard {
            cells[DOCUMENT_NUMBER_COLUMN] = guard_text(&cells[DOCUMENT_NUMBER_COLUMN]);
        }
        out.write_record(&cells)?;
    }
    out.flush()?;
    Ok(())
}

fn write_jsonl<W: Write>(mut writer: W, records: &[CanonicalRecord]) -> Result<(), ExportError> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Wrap a value as an Excel text formula.
pub fn guard_text(value: &str) -> String {
    format!("=\"{}\"", value.replace('"', "\"\""))
}

/// Undo [`guard_text`]; unguarded values pass through.
pub fn unguard_text(cell: &str) -> String {
    match cell.strip_prefix("=\"").and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner.replace("\"\"", "\""),
        None => cell.to_string(),
    }
}

/// Read rows written by [`write_records`] back as text cells, skipping the
/// header and stripping the document-number guard.
pub fn read_delimited<R: Read>(reader: R, format: ExportFormat) -> Result<Vec<Vec<String>>, ExportError> {
    let delimiter = format.delimiter().unwrap_or(b',');
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(reader);
    let mut rows = Vec::new();
    for row in rdr.records() {
        let mut cells: Vec<String> = row?.iter().map(str::to_string).collect();
        if let Some(cell) = cells.get_mut(DOCUMENT_NUMBER_COLUMN) {
            *cell = unguard_text(cell);
        }
        rows.push(cells);
    }
    Ok(rows)
}

/// Write `records` to `path`, creating parent directories.
pub fn write_file(
    path: &Path,
    records: &[CanonicalRecord],
    opts: ExportOptions,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_records(BufWriter::new(file), records, opts)
}

/// Write one file per non-empty source plus the combined file into
/// `config.output.dir`. Returns the paths written, in write order.
pub fn write_outputs(aggregate: &Aggregate, config: &Config) -> Result<Vec<PathBuf>, ExportError> {
    let opts = ExportOptions::from(config);
    let dir = &config.output.dir;
    let ext = opts.format.extension();
    let mut written = Vec::new();

    for kind in SourceKind::ALL {
        let records = aggregate.source(kind);
        if records.is_empty() {
            tracing::info!(source = %kind, "no records; skipping file");
            continue;
        }
        let path = dir.join(format!("{}.{ext}", file_stem_for(config, kind)));
        write_file(&path, records, opts)?;
        tracing::info!(source = %kind, count = records.len(), path = %path.display(), "saved");
        written.push(path);
    }

    if !aggregate.combined.is_empty() {
        let path = dir.join(format!("{}.{ext}", config.output.combined_stem));
        write_file(&path, &aggregate.combined, opts)?;
        tracing::info!(count = aggregate.combined.len(), path = %path.display(), "saved combined");
        written.push(path);
    }

    Ok(written)
}

fn file_stem_for(config: &Config, kind: SourceKind) -> String {
    let stem = match kind {
        SourceKind::Ruling => &config.sources.ruling.file_stem,
        SourceKind::Rdao => &config.sources.rdao.file_stem,
        SourceKind::Pdf => &config.sources.pdf.file_stem,
    };
    if stem.is_empty() {
        kind.to_string()
    } else {
        stem.clone()
    }
}
