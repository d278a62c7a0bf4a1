//! Selection in, chart and table out

use crate::chart::{to_chart, ChartKind, ChartSpec};
use crate::context::ExplorerContext;
use crate::engine::{aggregate, filter_rows, GroupedCount};
use crate::table::TablePayload;
use imtrend_io::RecordColumn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Filter choices made in the UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    /// Keywords to match; empty means no keyword constraint
    pub keywords: Vec<String>,

    /// Repositories to include. `None` selects every known repository; an
    /// explicit empty list selects none.
    pub repositories: Option<Vec<String>>,

    /// Chart kind; the configured default when unset
    pub chart_kind: Option<ChartKind>,
}

impl Selection {
    /// Select everything with the default chart
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_repositories<I, S>(mut self, repositories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repositories = Some(repositories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_chart_kind(mut self, kind: ChartKind) -> Self {
        self.chart_kind = Some(kind);
        self
    }
}

/// Everything the dashboard renders for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exploration {
    pub chart: ChartSpec,
    pub table: TablePayload,
    pub grouped: Vec<GroupedCount>,
    /// Fact rows that passed both filters; equals the sum of grouped counts
    pub matched_rows: usize,
}

/// Run a selection against a context
pub fn explore(ctx: &ExplorerContext, selection: &Selection) -> Exploration {
    let keywords: HashSet<String> = selection.keywords.iter().cloned().collect();
    let repositories: HashSet<String> = match &selection.repositories {
        Some(repos) => repos.iter().cloned().collect(),
        None => ctx.index().repositories.iter().cloned().collect(),
    };
    let kind = selection
        .chart_kind
        .unwrap_or(ctx.chart_config().default_kind);

    let rows = filter_rows(ctx.expanded(), &keywords, &repositories);
    let grouped = aggregate(&rows);
    let chart = to_chart(&grouped, kind, ctx.chart_config());
    let table = TablePayload::new(&rows, &RecordColumn::ALL, ctx.columns());

    tracing::debug!(
        keywords = keywords.len(),
        repositories = repositories.len(),
        matched_rows = rows.len(),
        groups = grouped.len(),
        table_rows = table.len(),
        "Explored selection"
    );

    Exploration {
        chart,
        table,
        grouped,
        matched_rows: rows.len(),
    }
}
