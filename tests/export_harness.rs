#![allow(unused)]
//! Export layer integration harness.
//!
//! # What this covers
//!
//! - **Files written**: one file per non-empty source plus the combined file,
//!   named from the configured stems and format extension.
//! - **CSV layout**: header, column order, empty cells for absent fields,
//!   the `="…"` text guard on `document_number` (snapshot-tested with
//!   `insta`).
//! - **Round trip**: document numbers read back byte-for-byte, including
//!   leading zeros that a spreadsheet would otherwise strip.
//! - **JSONL**: absent fields are `null`, never placeholder text.
//!
//! # Running
//!
//! ```sh
//! cargo test --test export_harness
//! # Update snapshots after intentional format changes:
//! cargo insta review
//! ```

mod common;
use common::*;

use birdocs_core::export::{self, read_delimited, write_records, ExportFormat, ExportOptions};
use birdocs_core::{aggregate, run, SourceKind};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn csv_text(guard: bool) -> String {
    let report = run(&one_of_each(), &birdocs_core::config::Config::defaults(), captured_at());
    let mut buf = Vec::new();
    write_records(
        &mut buf,
        &report.aggregate.combined,
        ExportOptions {
            format: ExportFormat::Csv,
            excel_text_guard: guard,
        },
    )
    .unwrap();
    String::from_utf8(buf).unwrap()
}

// ---------------------------------------------------------------------------
// Files on disk
// ---------------------------------------------------------------------------

#[test]
fn writes_one_file_per_source_and_a_combined_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let report = run(&one_of_each(), &config, captured_at());

    let written = export::write_outputs(&report.aggregate, &config).unwrap();

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "legal_rulings.csv",
            "rdao_orders.csv",
            "pdf_documents.csv",
            "unified_data.csv",
        ]
    );
    for path in &written {
        assert!(path.starts_with(dir.path()));
    }
}

#[test]
fn empty_sources_write_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.output.format = ExportFormat::Tsv;
    let records = vec![RecordBuilder::ruling("001-2025").build()];
    let agg = aggregate(BTreeMap::from([(SourceKind::Ruling, records)]));

    let written = export::write_outputs(&agg, &config).unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("legal_rulings.tsv"),
            dir.path().join("unified_data.tsv"),
        ]
    );
}

#[test]
fn nothing_to_write_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir.path().join("out"));
    let written = export::write_outputs(&aggregate(BTreeMap::new()), &config).unwrap();
    assert!(written.is_empty());
    assert!(!dir.path().join("out").exists());
}

// ---------------------------------------------------------------------------
// CSV layout
// ---------------------------------------------------------------------------

#[test]
fn csv_snapshot() {
    insta::assert_snapshot!(csv_text(true).trim_end(), @r###"
    title,document_number,document_date,year,subject_matter,document_type,category,pdf_url,source_url,scraped_at
    BIR Ruling No. 018-2025,"=""018-2025""",,2025,,BIR Ruling,Legal and Legislative Rulings,https://bir-cdn.bir.gov.ph/BIR/pdf/BIR-RULING-018-2025.pdf,https://www.bir.gov.ph/Legal-Matters-Legal-and-Legislative-Rulings,2025-01-15T08:30:00Z
    RDAO No. 35-2024,"=""35-2024""",2024-12-19,2024,Delegation of authority to approve refunds,Revenue Delegation Authority Order,RDAO,https://bir-cdn.bir.gov.ph/BIR/pdf/RDAO-35-2024.pdf,https://www.bir.gov.ph/2024-Revenue-Delegation-Authority-Orders,2025-01-15T08:30:00Z
    Ra 10963 Rrd,"=""10963""",,,,,,https://bir-cdn.bir.gov.ph/local/pdf/RA-10963-RRD.pdf,,2025-01-15T08:30:00Z
    "###);
}

#[test]
fn unguarded_csv_has_plain_numbers() {
    let text = csv_text(false);
    let second_line = text.lines().nth(1).unwrap();
    assert!(second_line.starts_with("BIR Ruling No. 018-2025,018-2025,,2025,"));
}

#[test]
fn no_cell_is_a_placeholder() {
    let text = csv_text(true);
    for line in text.lines() {
        for cell in line.split(',') {
            assert_ne!(cell.trim().to_ascii_uppercase(), "N/A", "in line {line:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn document_numbers_round_trip_through_delimited_files() {
    let dir = tempfile::tempdir().unwrap();
    let records = vec![
        RecordBuilder::ruling("001-2025").build(),
        RecordBuilder::new("Padded", "007").build(),
        RecordBuilder::new("Quoted", "A\"1").build(),
    ];

    for format in [ExportFormat::Csv, ExportFormat::Tsv] {
        let path = dir.path().join(format!("records.{}", format.extension()));
        export::write_file(
            &path,
            &records,
            ExportOptions {
                format,
                excel_text_guard: true,
            },
        )
        .unwrap();

        let rows = read_delimited(std::fs::File::open(&path).unwrap(), format).unwrap();
        let numbers: Vec<_> = rows.iter().map(|row| row[1].as_str()).collect();
        assert_eq!(numbers, vec!["001-2025", "007", "A\"1"], "format {format}");
        assert_eq!(rows[0][9], CAPTURED_AT_TEXT);
    }
}

// ---------------------------------------------------------------------------
// JSONL
// ---------------------------------------------------------------------------

#[test]
fn jsonl_uses_null_for_absent_fields() {
    let record = RecordBuilder::new("Ra 10963 Rrd", "10963")
        .pdf_url(STANDALONE_PDF)
        .build();
    let mut buf = Vec::new();
    write_records(
        &mut buf,
        &[record],
        ExportOptions {
            format: ExportFormat::Jsonl,
            excel_text_guard: true,
        },
    )
    .unwrap();

    let line = String::from_utf8(buf).unwrap();
    let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(value["document_number"], "10963");
    assert_eq!(value["document_date"], serde_json::Value::Null);
    assert_eq!(value["year"], serde_json::Value::Null);
    assert_eq!(value["scraped_at"], CAPTURED_AT_TEXT);
}
