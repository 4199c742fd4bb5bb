//! Configuration types for birdocs.
//!
//! [`Config::load`] layers the built-in defaults, the optional user file at
//! `~/.config/birdocs/config.toml`, and an optional explicit file.
//! [`Config::defaults`] returns the built-in defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::export::ExportFormat;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[output]
dir              = "bir-extracts"
format           = "csv"
excel_text_guard = true
combined_stem    = "unified_data"

[sources.ruling]
source_url    = "https://www.bir.gov.ph/Legal-Matters-Legal-and-Legislative-Rulings"
document_type = "BIR Ruling"
category      = "Legal and Legislative Rulings"
file_stem     = "legal_rulings"

[sources.rdao]
source_url    = "https://www.bir.gov.ph/2024-Revenue-Delegation-Authority-Orders"
document_type = "Revenue Delegation Authority Order"
category      = "RDAO"
file_stem     = "rdao_orders"

[sources.pdf]
file_stem = "pdf_documents"
urls      = ["https://bir-cdn.bir.gov.ph/local/pdf/RA-10963-RRD.pdf"]

[validation]
report_duplicates = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level run configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    pub sources: SourcesConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub format: ExportFormat,
    /// Write `document_number` cells as `="…"` so spreadsheets keep them
    /// as text.
    #[serde(default = "default_true")]
    pub excel_text_guard: bool,
    #[serde(default = "default_combined_stem")]
    pub combined_stem: String,
}

fn default_dir() -> PathBuf { PathBuf::from("bir-extracts") }
fn default_true() -> bool { true }
fn default_combined_stem() -> String { "unified_data".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            format: ExportFormat::default(),
            excel_text_guard: default_true(),
            combined_stem: default_combined_stem(),
        }
    }
}

/// `[sources]` section, one table per source kind.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    pub ruling: SourceProfile,
    pub rdao: SourceProfile,
    pub pdf: PdfSourceConfig,
}

/// Labels an adapter stamps on every record of its source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceProfile {
    /// Listing page; also the base for relative links.
    pub source_url: Option<String>,
    pub document_type: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub file_stem: String,
}

/// `[sources.pdf]`: standalone PDFs have no listing page or labels.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PdfSourceConfig {
    #[serde(default)]
    pub file_stem: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// `[validation]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Warn about repeated document numbers within (source, year).
    #[serde(default = "default_true")]
    pub report_duplicates: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            report_duplicates: default_true(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, then `~/.config/birdocs/config.toml` if
    /// it exists, then `explicit` (which must exist when given).
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(config_path().as_path()).required(false));
        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("birdocs")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
