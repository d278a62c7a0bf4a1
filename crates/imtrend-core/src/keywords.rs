//! Keyword expansion
//!
//! The source stores keywords denormalized, as one comma-separated cell per
//! publication. Expanding them once into (record, keyword) fact rows lets
//! every filter be a plain membership test.

use imtrend_io::PublicationRecord;
use std::sync::Arc;

/// One (publication, keyword) pair.
///
/// The record is shared with every other fact row of the same publication;
/// expansion never copies or mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedFactRow {
    pub record: Arc<PublicationRecord>,
    /// Keyword with surrounding whitespace removed; empty for records
    /// without keywords
    pub keyword: String,
}

impl ExpandedFactRow {
    pub fn year(&self) -> i32 {
        self.record.year
    }

    pub fn repository(&self) -> &str {
        &self.record.repository
    }
}

/// Split a raw keyword cell into trimmed tokens.
///
/// An empty cell yields a single empty token. Duplicates are kept: `"AI, AI"`
/// yields two `"AI"` tokens.
///
/// # Examples
/// ```
/// use imtrend_core::split_keywords;
/// assert_eq!(split_keywords("ML, AI"), vec!["ML", "AI"]);
/// assert_eq!(split_keywords(""), vec![""]);
/// ```
pub fn split_keywords(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).collect()
}

/// Expand records into keyword-level fact rows, preserving record order
pub fn expand(records: &[Arc<PublicationRecord>]) -> Vec<ExpandedFactRow> {
    records
        .iter()
        .flat_map(|record| {
            split_keywords(&record.keywords_found)
                .into_iter()
                .map(move |keyword| ExpandedFactRow {
                    record: Arc::clone(record),
                    keyword: keyword.to_string(),
                })
        })
        .collect()
}
