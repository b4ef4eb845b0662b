//! Search-side filtering: term extraction and record matching.
//!
//! A record matches when at least one of its free-text fields contains
//! every search term as a case-insensitive substring. Terms never match
//! across fields: "creality klipper" finds nothing even if one field
//! says Creality and another says Klipper.

use crate::model::Printer;
use serde::Deserialize;

/// Raw search input before term extraction.
///
/// Query-string encodings are ambiguous about repeated parameters, so
/// search arrives either as a single raw string or as a pre-split list.
/// Both shapes normalize to the same term list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SearchParam {
    /// One raw string, split on whitespace into terms.
    One(String),
    /// A pre-split list; each element is one term.
    Many(Vec<String>),
}

impl SearchParam {
    /// Build from repeated CLI occurrences.
    ///
    /// No occurrences means no search. A single occurrence keeps the raw
    /// string form (and is split on whitespace later); several
    /// occurrences are taken as an already-split term list.
    pub fn from_args(values: &[String]) -> Option<Self> {
        match values {
            [] => None,
            [single] => Some(SearchParam::One(single.clone())),
            many => Some(SearchParam::Many(many.to_vec())),
        }
    }

    /// Extract the lowercased, non-empty search terms.
    ///
    /// The single-string form splits on runs of whitespace; the list form
    /// trims each element. Blank input yields an empty term list in both
    /// shapes.
    pub fn terms(&self) -> Vec<String> {
        match self {
            SearchParam::One(raw) => raw
                .split_whitespace()
                .map(str::to_lowercase)
                .collect(),
            SearchParam::Many(items) => items
                .iter()
                .map(|item| item.trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect(),
        }
    }
}

/// Whether one field satisfies every term.
fn field_matches(field: &str, terms: &[String]) -> bool {
    let lowered = field.to_lowercase();
    terms.iter().all(|term| lowered.contains(term.as_str()))
}

/// Whether a record matches: some single text field contains all terms.
pub fn record_matches(record: &Printer, terms: &[String]) -> bool {
    record.string_fields().any(|field| field_matches(field, terms))
}

/// Filter a record list by an optional search parameter.
///
/// Absent input, or input with no effective terms, returns every record
/// unchanged. Matching records keep their original relative order.
pub fn filter_records(records: &[Printer], search: Option<&SearchParam>) -> Vec<Printer> {
    let terms = match search {
        Some(param) => param.terms(),
        None => Vec::new(),
    };

    if terms.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| record_matches(record, &terms))
        .cloned()
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
