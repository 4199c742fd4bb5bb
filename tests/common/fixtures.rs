//! Saved dataset responses and payloads used across harnesses.
//!
//! The JSON mirrors what the CMS dataset endpoint returns: one item per
//! year for rulings, one item holding an HTML table for RDAOs.

use birdocs_core::config::Config;
use birdocs_core::{Cell, Link, RulingEntry, SourcePayload, TableRow};
use chrono::{DateTime, TimeZone, Utc};

/// The run timestamp every harness uses.
pub fn captured_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap()
}

/// `captured_at()` as it appears in delimited output.
pub const CAPTURED_AT_TEXT: &str = "2025-01-15T08:30:00Z";

pub const RULING_PDF: &str = "https://bir-cdn.bir.gov.ph/BIR/pdf/BIR-RULING-018-2025.pdf";
pub const RDAO_PDF: &str = "https://bir-cdn.bir.gov.ph/BIR/pdf/RDAO-35-2024.pdf";
pub const STANDALONE_PDF: &str = "https://bir-cdn.bir.gov.ph/local/pdf/RA-10963-RRD.pdf";

/// Rulings response: two years, three PDF links and one non-PDF link.
pub const RULINGS_RESPONSE: &str = r#"{
    "data": [
        {"content": {"Year": "2025", "Rulings": "<ul><li><a href=\"https://bir-cdn.bir.gov.ph/BIR/pdf/BIR-RULING-018-2025.pdf\">BIR-RULING-018-2025.pdf</a></li><li><a href=\"https://bir-cdn.bir.gov.ph/BIR/pdf/BIR-RULING-019-2025.pdf\" title=\"BIR Ruling No. 19-2025\">Download</a></li><li><a href=\"/Legal-Matters\">Back</a></li></ul>"}},
        {"content": {"Year": 2024, "Rulings": "<p><a href=\"/BIR/pdf/BIR-RULING-101-2024.pdf\">BIR Ruling No. 101-2024</a></p>"}}
    ]
}"#;

/// RDAO response: a header row, two full rows and one short row.
pub const RDAO_RESPONSE: &str = r#"{
    "data": [{
        "content": {
            "Title": "2024 Revenue Delegation Authority Orders",
            "Table": "<table><thead><tr><th>Issuance</th><th>Subject Matter</th><th>Date of Issue</th></tr></thead><tbody><tr><td>RDAO No. 35-2024</td><td>Delegation of authority to approve refunds <a href=\"/digest/35-2024.pdf\">Digest</a> | <a href=\"https://bir-cdn.bir.gov.ph/BIR/pdf/RDAO-35-2024.pdf\" title=\"Full Text\">Full Text</a></td><td>December 19, 2024</td></tr><tr><td>RDAO No. 34-2024</td><td>Amending RDAO No. 2-2023 <a href=\"/BIR/pdf/RDAO-34-2024.pdf\">Full Text</a></td><td>Sometime in November</td></tr><tr><td>RDAO No. 33-2024</td><td>No date column</td></tr></tbody></table>"
        }
    }]
}"#;

/// The smallest end-to-end input: one entry per source.
pub fn one_of_each() -> Vec<SourcePayload> {
    vec![
        SourcePayload::Ruling(vec![RulingEntry {
            fragment: format!(r#"<a href="{RULING_PDF}">BIR-RULING-018-2025.pdf</a>"#),
            year_label: Some("2025".to_string()),
        }]),
        SourcePayload::Rdao(vec![rdao_row(
            "RDAO No. 35-2024",
            "Delegation of authority to approve refunds",
            RDAO_PDF,
            "December 19, 2024",
        )]),
        SourcePayload::Pdf(vec![STANDALONE_PDF.to_string()]),
    ]
}

/// A three-cell RDAO row with one "Full Text" link in the subject cell.
pub fn rdao_row(issuance: &str, subject: &str, href: &str, date: &str) -> TableRow {
    TableRow {
        cells: vec![
            Cell {
                text: issuance.to_string(),
                links: vec![],
            },
            Cell {
                text: subject.to_string(),
                links: vec![Link {
                    href: href.to_string(),
                    title: Some("Full Text".to_string()),
                    text: "Full Text".to_string(),
                }],
            },
            Cell {
                text: date.to_string(),
                links: vec![],
            },
        ],
    }
}

/// Built-in defaults with output redirected into `dir`.
pub fn config_in(dir: &std::path::Path) -> Config {
    let mut config = Config::defaults();
    config.output.dir = dir.to_path_buf();
    config
}
