//! RDAO dataset: an HTML table embedded in each item's content.

use std::sync::OnceLock;

use birdocs_core::{Cell, Link, TableRow};
use scraper::{ElementRef, Html, Selector};

use crate::collapse_ws;
use crate::dataset::Dataset;

struct TableSelectors {
    row: Selector,
    cell: Selector,
    link: Selector,
}

fn selectors() -> &'static TableSelectors {
    static SEL: OnceLock<TableSelectors> = OnceLock::new();
    SEL.get_or_init(|| TableSelectors {
        row: Selector::parse("tr").expect("row selector"),
        cell: Selector::parse("td").expect("cell selector"),
        link: Selector::parse("a[href]").expect("link selector"),
    })
}

/// Every `<tr>` with at least one `<td>`, across all dataset items.
///
/// Header rows (`<th>` only) are dropped here; short rows are kept so the
/// adapter can report them.
pub fn table_rows(dataset: &Dataset) -> Vec<TableRow> {
    let sel = selectors();
    let mut rows = Vec::new();
    for item in &dataset.data {
        let Some(html) = item.table_html() else {
            continue;
        };
        let fragment = Html::parse_fragment(html);
        for tr in fragment.select(&sel.row) {
            let cells: Vec<Cell> = tr.select(&sel.cell).map(parse_cell).collect();
            if !cells.is_empty() {
                rows.push(TableRow { cells });
            }
        }
    }
    tracing::debug!(rows = rows.len(), "rdao table rows parsed");
    rows
}

fn parse_cell(td: ElementRef<'_>) -> Cell {
    let links = td
        .select(&selectors().link)
        .map(|a| Link {
            href: a.value().attr("href").unwrap_or_default().trim().to_string(),
            title: a.value().attr("title").map(collapse_ws),
            text: collapse_ws(&a.text().collect::<String>()),
        })
        .collect();
    Cell {
        text: text_outside_links(td),
        links,
    }
}

/// Cell text with link text removed; `|` separators become spaces.
fn text_outside_links(td: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in td.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let in_link = node
            .ancestors()
            .take_while(|a| a.id() != td.id())
            .any(|a| a.value().as_element().is_some_and(|e| e.name() == "a"));
        if !in_link {
            out.push_str(text);
            out.push(' ');
        }
    }
    collapse_ws(&out.replace('|', " "))
}
