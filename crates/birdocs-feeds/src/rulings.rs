//! Legal rulings dataset: one item per year, each with an HTML blob of
//! links to the year's ruling PDFs.

use std::sync::OnceLock;

use birdocs_core::RulingEntry;
use scraper::{Html, Selector};

use crate::dataset::Dataset;

const YEAR_FIELD: &str = "Year";
const RULINGS_FIELD: &str = "Rulings";

fn link_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("a[href]").expect("link selector"))
}

/// Split every item's rulings HTML into one entry per PDF link.
///
/// Items without HTML and links not ending in `.pdf` are skipped.
pub fn ruling_entries(dataset: &Dataset) -> Vec<RulingEntry> {
    let mut entries = Vec::new();
    for item in &dataset.data {
        let Some(html) = item.field(RULINGS_FIELD).filter(|h| !h.trim().is_empty()) else {
            continue;
        };
        let year_label = item.field(YEAR_FIELD);
        let fragment = Html::parse_fragment(&html);
        let before = entries.len();

        for link in fragment.select(link_selector()) {
            let href = link.value().attr("href").unwrap_or_default().trim();
            if !href.to_ascii_lowercase().ends_with(".pdf") {
                continue;
            }
            entries.push(RulingEntry {
                fragment: link.html(),
                year_label: year_label.clone(),
            });
        }

        tracing::debug!(
            year = year_label.as_deref().unwrap_or("?"),
            rulings = entries.len() - before,
            "ruling links found"
        );
    }
    entries
}
