use std::sync::OnceLock;

use scraper::{Html, Selector};

use super::{non_empty, resolve_link, year_in, Adapter, RulingEntry};
use crate::config::SourceProfile;
use crate::issue::IssueKind;
use crate::normalizer::{
    collapse_ws, file_stem, normalize_title, number_with_year, parse_document_number, year_of,
};
use crate::types::{PartialRecord, SourceKind};

fn link_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("a[href]").expect("link selector"))
}

/// Legal rulings: one linked PDF per entry, no dates.
#[derive(Debug, Clone)]
pub struct RulingAdapter {
    profile: SourceProfile,
}

impl RulingAdapter {
    pub fn new(profile: SourceProfile) -> Self {
        Self { profile }
    }
}

impl Adapter for RulingAdapter {
    type Entry = RulingEntry;

    fn kind(&self) -> SourceKind {
        SourceKind::Ruling
    }

    fn adapt_entry(
        &self,
        entry: &RulingEntry,
        _warnings: &mut Vec<IssueKind>,
    ) -> Result<PartialRecord, IssueKind> {
        let fragment = Html::parse_fragment(&entry.fragment);
        let link = fragment.select(link_selector()).next().ok_or_else(|| {
            IssueKind::MalformedSourcePayload {
                reason: "no <a href> in ruling fragment".to_string(),
            }
        })?;

        let href = link.value().attr("href").unwrap_or_default().trim();
        let text = collapse_ws(&link.text().collect::<String>());
        let raw_title = link
            .value()
            .attr("title")
            .map(collapse_ws)
            .and_then(non_empty)
            .or_else(|| non_empty(text))
            .unwrap_or_else(|| href.to_string());

        // Prefer whichever of title and filename carries a number/year pair.
        let stem = file_stem(href);
        let basis = [raw_title.as_str(), stem]
            .into_iter()
            .find(|candidate| number_with_year(candidate).is_some())
            .unwrap_or(raw_title.as_str());

        let parsed = parse_document_number(basis, SourceKind::Ruling)
            .or_else(|| parse_document_number(stem, SourceKind::Ruling));
        let number_normalized = parsed.is_some();
        let document_number = parsed.unwrap_or_else(|| raw_title.clone());

        let year = year_of(&document_number)
            .or_else(|| entry.year_label.as_deref().and_then(year_in));

        Ok(PartialRecord {
            title: normalize_title(basis, SourceKind::Ruling),
            document_number,
            number_normalized,
            document_date: None,
            year,
            subject_matter: None,
            document_type: self.profile.document_type.clone(),
            category: self.profile.category.clone(),
            pdf_url: resolve_link(href, self.profile.source_url.as_deref()),
            source_url: self.profile.source_url.clone(),
        })
    }
}
