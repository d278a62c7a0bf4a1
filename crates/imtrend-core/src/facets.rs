//! Facet index: option lists for the keyword and repository filters
//!
//! Built once after load. The dataset never changes afterwards, so the
//! index is never invalidated.

use crate::keywords::ExpandedFactRow;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Keyword frequencies and the repository set of a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetIndex {
    /// Number of fact rows bearing each keyword, duplicates within a record
    /// included; the empty keyword is counted like any other
    pub keyword_freq: HashMap<String, usize>,

    /// Distinct repositories, sorted
    pub repositories: BTreeSet<String>,
}

/// One entry of a filter option list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Build the facet index over expanded fact rows
pub fn build_index(expanded: &[ExpandedFactRow]) -> FacetIndex {
    let mut index = FacetIndex::default();

    for row in expanded {
        *index.keyword_freq.entry(row.keyword.clone()).or_insert(0) += 1;
        if !index.repositories.contains(row.repository()) {
            index.repositories.insert(row.repository().to_string());
        }
    }

    index
}

impl FacetIndex {
    /// Number of fact rows bearing a keyword
    pub fn keyword_count(&self, keyword: &str) -> usize {
        self.keyword_freq.get(keyword).copied().unwrap_or(0)
    }

    /// Keyword options sorted alphabetically, labelled `"keyword (count)"`
    pub fn keyword_options(&self) -> Vec<FacetOption> {
        let mut keywords: Vec<(&String, &usize)> = self.keyword_freq.iter().collect();
        keywords.sort_by(|a, b| a.0.cmp(b.0));

        keywords
            .into_iter()
            .map(|(keyword, &count)| FacetOption {
                value: keyword.clone(),
                label: format!("{} ({})", keyword, count),
                count: Some(count),
            })
            .collect()
    }

    /// Repository options sorted alphabetically
    pub fn repository_options(&self) -> Vec<FacetOption> {
        self.repositories
            .iter()
            .map(|repo| FacetOption {
                value: repo.clone(),
                label: repo.clone(),
                count: None,
            })
            .collect()
    }

    /// Repositories selected when the user has not chosen any: all of them
    pub fn default_repositories(&self) -> Vec<String> {
        self.repositories.iter().cloned().collect()
    }

    /// Number of distinct keywords, including the empty keyword
    pub fn num_keywords(&self) -> usize {
        self.keyword_freq.len()
    }
}
