//! Immutable exploration context
//!
//! Built once at startup and shared read-only afterwards. Nothing in it is
//! mutated after construction, so it can be wrapped in an `Arc` and read by
//! any number of request handlers without locking.

use crate::config::{ChartConfig, ImtrendConfig};
use crate::error::{ConfigError, ExplorerResult};
use crate::facets::{build_index, FacetIndex};
use crate::keywords::{expand, ExpandedFactRow};
use imtrend_io::{load_path, ColumnMapping, LoadReport, PublicationRecord};
use std::sync::Arc;

/// Loaded dataset with its derived structures
#[derive(Debug, Clone)]
pub struct ExplorerContext {
    records: Vec<Arc<PublicationRecord>>,
    expanded: Vec<ExpandedFactRow>,
    index: FacetIndex,
    report: LoadReport,
    columns: ColumnMapping,
    chart: ChartConfig,
}

impl ExplorerContext {
    /// Build a context from already-loaded records with default labels
    pub fn from_records(records: Vec<PublicationRecord>) -> Self {
        let report = LoadReport {
            rows_read: records.len(),
            rows_loaded: records.len(),
            ..Default::default()
        };
        Self::build(records, report, ColumnMapping::default(), ChartConfig::default())
    }

    /// Load the configured dataset and build a context from it
    pub fn from_config(config: &ImtrendConfig) -> ExplorerResult<Self> {
        let path = config.dataset.path.as_ref().ok_or_else(|| {
            ConfigError::InvalidValue("dataset.path is required".to_string())
        })?;
        let options = config.dataset.load_options()?;
        let dataset = load_path(path, &options)?;

        Ok(Self::build(
            dataset.records,
            dataset.report,
            config.dataset.columns.clone(),
            config.chart.clone(),
        ))
    }

    fn build(
        records: Vec<PublicationRecord>,
        report: LoadReport,
        columns: ColumnMapping,
        chart: ChartConfig,
    ) -> Self {
        let records: Vec<Arc<PublicationRecord>> = records.into_iter().map(Arc::new).collect();
        let expanded = expand(&records);
        let index = build_index(&expanded);

        tracing::info!(
            records = records.len(),
            expanded_rows = expanded.len(),
            keywords = index.num_keywords(),
            repositories = index.repositories.len(),
            "Built exploration context"
        );

        Self {
            records,
            expanded,
            index,
            report,
            columns,
            chart,
        }
    }

    pub fn records(&self) -> &[Arc<PublicationRecord>] {
        &self.records
    }

    pub fn expanded(&self) -> &[ExpandedFactRow] {
        &self.expanded
    }

    pub fn index(&self) -> &FacetIndex {
        &self.index
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn columns(&self) -> &ColumnMapping {
        &self.columns
    }

    pub fn chart_config(&self) -> &ChartConfig {
        &self.chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExplorerError;

    fn record(repo: &str, keywords: &str) -> PublicationRecord {
        PublicationRecord {
            repository: repo.to_string(),
            title: "T".to_string(),
            author: "A".to_string(),
            year: 2020,
            keywords_found: keywords.to_string(),
            pages: String::new(),
        }
    }

    #[test]
    fn test_from_records_derives_index() {
        let ctx = ExplorerContext::from_records(vec![record("RepoA", "ML, AI"), record("RepoB", "")]);
        assert_eq!(ctx.records().len(), 2);
        assert_eq!(ctx.expanded().len(), 3);
        assert_eq!(ctx.index().keyword_count("AI"), 1);
        assert_eq!(ctx.report().rows_loaded, 2);
    }

    #[test]
    fn test_from_config_requires_path() {
        let err = ExplorerContext::from_config(&ImtrendConfig::default()).unwrap_err();
        assert!(matches!(err, ExplorerError::Config(_)));
    }

    #[test]
    fn test_from_config_missing_file_is_load_error() {
        let mut config = ImtrendConfig::default();
        config.dataset.path = Some("/no/such/survey.csv".into());
        let err = ExplorerContext::from_config(&config).unwrap_err();
        assert!(matches!(err, ExplorerError::Load(_)));
    }

    #[test]
    fn test_context_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExplorerContext>();
    }
}
