//! Filter and aggregate engine
//!
//! Filtering runs over keyword-level fact rows, so grouped counts are
//! keyword hits rather than distinct publications.
//!
//! The two filters treat an empty selection differently:
//!
//! - no repositories selected: nothing matches
//! - no keywords selected: no keyword constraint

use crate::keywords::ExpandedFactRow;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Number of matching fact rows for one (year, repository) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupedCount {
    pub year: i32,
    pub repository: String,
    pub count: usize,
}

/// Fact rows matching a repository and keyword selection, in input order
pub fn filter_rows<'a>(
    expanded: &'a [ExpandedFactRow],
    keywords: &HashSet<String>,
    repositories: &HashSet<String>,
) -> Vec<&'a ExpandedFactRow> {
    if repositories.is_empty() {
        return Vec::new();
    }

    expanded
        .iter()
        .filter(|row| repositories.contains(row.repository()))
        .filter(|row| keywords.is_empty() || keywords.contains(&row.keyword))
        .collect()
}

/// Count rows per (year, repository).
///
/// Output is ordered by year, then repository. Groups with no rows are not
/// emitted.
pub fn aggregate(rows: &[&ExpandedFactRow]) -> Vec<GroupedCount> {
    let mut groups: BTreeMap<(i32, &str), usize> = BTreeMap::new();
    for row in rows {
        *groups.entry((row.year(), row.repository())).or_insert(0) += 1;
    }

    groups
        .into_iter()
        .map(|((year, repository), count)| GroupedCount {
            year,
            repository: repository.to_string(),
            count,
        })
        .collect()
}

/// Filter fact rows and count them per (year, repository)
pub fn filter_and_aggregate(
    expanded: &[ExpandedFactRow],
    keywords: &HashSet<String>,
    repositories: &HashSet<String>,
) -> Vec<GroupedCount> {
    aggregate(&filter_rows(expanded, keywords, repositories))
}
