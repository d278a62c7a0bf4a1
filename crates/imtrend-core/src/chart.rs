//! Chart payloads built from grouped counts
//!
//! A [`ChartSpec`] is renderer-agnostic: one series per repository, each a
//! year-ordered list of points. The chart kind only changes styling hints.

use crate::config::ChartConfig;
use crate::engine::GroupedCount;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How series are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Connected points with markers
    #[default]
    #[serde(alias = "linha")]
    Line,
    /// Grouped columns
    #[serde(alias = "barra")]
    Bar,
}

impl ChartKind {
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" | "linha" => Ok(ChartKind::Line),
            "bar" | "barra" => Ok(ChartKind::Bar),
            other => Err(format!("Unknown chart kind: {}", other)),
        }
    }
}

/// Arrangement of bars sharing an x value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    Grouped,
}

/// Hover behaviour hint for interactive renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverMode {
    /// One tooltip listing every series at the hovered year
    XUnified,
}

/// Rendering hints derived from the chart kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub markers: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<BarMode>,
    pub hover_mode: HoverMode,
}

impl ChartStyle {
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Line => Self {
                markers: true,
                bar_mode: None,
                hover_mode: HoverMode::XUnified,
            },
            ChartKind::Bar => Self {
                markers: false,
                bar_mode: Some(BarMode::Grouped),
                hover_mode: HoverMode::XUnified,
            },
        }
    }
}

/// A single (year, count) point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub year: i32,
    pub count: usize,
}

/// Points of one repository, ordered by year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

/// Renderable chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// True when the filters matched nothing; `series` is then empty and the
    /// title carries the "nothing found" message
    pub empty: bool,
    pub series: Vec<ChartSeries>,
    pub style: ChartStyle,
}

impl ChartSpec {
    /// Placeholder shown when the filters match nothing
    pub fn no_data(kind: ChartKind, config: &ChartConfig) -> Self {
        Self {
            kind,
            title: config.empty_title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            empty: true,
            series: Vec::new(),
            style: ChartStyle::for_kind(kind),
        }
    }

    /// Sum of all point counts
    pub fn total(&self) -> usize {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.count)
            .sum()
    }
}

/// Build a chart from grouped counts
///
/// Series are ordered by repository name; points by year regardless of the
/// order of `grouped`.
pub fn to_chart(grouped: &[GroupedCount], kind: ChartKind, config: &ChartConfig) -> ChartSpec {
    if grouped.is_empty() {
        return ChartSpec::no_data(kind, config);
    }

    let mut by_repository: BTreeMap<&str, BTreeMap<i32, usize>> = BTreeMap::new();
    for group in grouped {
        *by_repository
            .entry(group.repository.as_str())
            .or_default()
            .entry(group.year)
            .or_insert(0) += group.count;
    }

    let series = by_repository
        .into_iter()
        .map(|(name, years)| ChartSeries {
            name: name.to_string(),
            points: years
                .into_iter()
                .map(|(year, count)| ChartPoint { year, count })
                .collect(),
        })
        .collect();

    ChartSpec {
        kind,
        title: config.title.clone(),
        x_label: config.x_label.clone(),
        y_label: config.y_label.clone(),
        empty: false,
        series,
        style: ChartStyle::for_kind(kind),
    }
}
