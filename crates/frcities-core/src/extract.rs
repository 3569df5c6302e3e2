//! Decode the downloaded dataset and collect unique city names.

use csv::{ReaderBuilder, StringRecord};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Unique city names, ordered by codepoint.
pub type CityNameSet = BTreeSet<String>;

/// UTF-8 decode with U+FFFD substituted for invalid sequences. Never fails.
pub fn decode_body(raw: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(raw)
}

/// Which header positions to consult, in preference order.
///
/// A duplicated header name resolves to its last occurrence.
fn candidate_positions(headers: &StringRecord, candidates: &[String]) -> Vec<usize> {
    candidates
        .iter()
        .filter_map(|name| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name.as_str())
                .map(|(i, _)| i)
                .last()
        })
        .collect()
}

/// First candidate field that is present and non-empty, trimmed.
///
/// A whitespace-only primary value still wins over the fallback and then
/// trims to nothing, so the row is dropped.
fn city_name<'r>(record: &'r StringRecord, positions: &[usize]) -> Option<&'r str> {
    let raw = positions
        .iter()
        .filter_map(|&i| record.get(i))
        .find(|v| !v.is_empty())?;
    let name = raw.trim();
    (!name.is_empty()).then_some(name)
}

/// Parse `text` with its first line as header and collect the names found in
/// the first non-empty candidate column of each row.
///
/// Rows without any usable candidate are skipped. A header with none of the
/// candidates yields an empty set.
pub fn extract_city_names(
    text: &str,
    delimiter: u8,
    candidates: &[String],
) -> Result<CityNameSet, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let positions = candidate_positions(&headers, candidates);
    if positions.is_empty() {
        tracing::warn!(
            "none of the name columns {:?} found in header {:?}",
            candidates,
            headers
        );
    }

    let mut names = CityNameSet::new();
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record?;
        rows += 1;
        if let Some(name) = city_name(&record, &positions) {
            names.insert(name.to_string());
        }
    }
    tracing::debug!("parsed {} rows, {} unique names", rows, names.len());
    Ok(names)
}
