use super::{collapse_ws, file_stem, number_with_year, zero_pad};
use crate::types::SourceKind;

/// Normalise a document title to the fixed phrasing for its source.
///
/// - Ruling: `BIR Ruling No. <NNN>-<YYYY>`, from filename tokens or prose.
/// - Rdao: trimmed verbatim.
/// - Pdf: title-cased filename stem.
///
/// Input without a recognisable number/year pair comes back trimmed.
pub fn normalize_title(raw: &str, kind: SourceKind) -> String {
    match kind {
        SourceKind::Ruling => match number_with_year(raw) {
            Some((number, year)) => format!("BIR Ruling No. {}-{}", zero_pad(number, 3), year),
            None => raw.trim().to_string(),
        },
        SourceKind::Rdao => raw.trim().to_string(),
        SourceKind::Pdf => title_from_filename(raw),
    }
}

fn title_from_filename(raw: &str) -> String {
    let spaced = file_stem(raw)
        .replace("%20", " ")
        .replace(['-', '_', '.', '+'], " ");
    collapse_ws(&spaced)
        .split(' ')
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character and lowercase the rest. A first character
/// with no single-character uppercase (`ß`) is kept as is.
fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(head)
        .chain(chars.flat_map(char::to_lowercase))
        .collect()
}
