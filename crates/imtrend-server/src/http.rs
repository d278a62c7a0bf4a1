//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use imtrend_core::{explore, Exploration, FacetOption, LoadReport, Selection};

use crate::AppState;

/// Option lists for the filter widgets
#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub keywords: Vec<FacetOption>,
    pub repositories: Vec<FacetOption>,
    /// Selection the UI starts from: every repository, no keyword filter
    pub default_selection: Selection,
}

/// Get keyword and repository options
pub async fn get_facets(State(state): State<Arc<AppState>>) -> Json<FacetsResponse> {
    let ctx = &state.context;
    let index = ctx.index();

    Json(FacetsResponse {
        keywords: index.keyword_options(),
        repositories: index.repository_options(),
        default_selection: Selection::all()
            .with_repositories(index.default_repositories())
            .with_chart_kind(ctx.chart_config().default_kind),
    })
}

/// Compute chart and table for a selection
pub async fn explore_selection(
    State(state): State<Arc<AppState>>,
    Json(selection): Json<Selection>,
) -> Json<Exploration> {
    Json(explore(&state.context, &selection))
}

/// Dataset summary
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub records: usize,
    pub expanded_rows: usize,
    pub keywords: usize,
    pub repositories: usize,
    pub load_report: LoadReport,
}

/// Get dataset status
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let ctx = &state.context;

    Json(StatusResponse {
        records: ctx.records().len(),
        expanded_rows: ctx.expanded().len(),
        keywords: ctx.index().num_keywords(),
        repositories: ctx.index().repositories.len(),
        load_report: ctx.report().clone(),
    })
}
