// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filtering and derived figures for a ledger view.
//!
//! Everything here is a pure function of the entries and criteria passed in.
//! [`Analysis::compute`] filters once and feeds the same view to every
//! reducer.

pub mod categories;
pub mod filter;
pub mod geometry;
pub mod metrics;
pub mod trend;

pub use categories::{DEFAULT_TOP_CATEGORIES, expense_breakdown, top_expense_categories};
pub use filter::{FilterCriteria, filter_entries};
pub use geometry::{PlotArea, Point, area_path, area_path_d, points_attr, project_points};
pub use metrics::summarize;
pub use trend::daily_trend;

use crate::models::{CategoryDataPoint, ChartDataPoint, LedgerEntry, MetricSummary};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Analysis<'a> {
    pub filtered: Vec<&'a LedgerEntry>,
    pub metrics: MetricSummary,
    pub trend: Vec<ChartDataPoint>,
    pub top_categories: Vec<CategoryDataPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub area: PlotArea,
    pub points: Vec<Point>,
    pub polyline: String,
    pub area_path: String,
}

impl<'a> Analysis<'a> {
    pub fn compute(entries: &'a [LedgerEntry], criteria: &FilterCriteria, limit: usize) -> Self {
        let filtered = filter_entries(entries, criteria);
        let metrics = summarize(filtered.iter().copied());
        let trend = daily_trend(filtered.iter().copied());
        let top_categories = top_expense_categories(filtered.iter().copied(), limit);
        Self {
            filtered,
            metrics,
            trend,
            top_categories,
        }
    }

    pub fn chart(&self, area: &PlotArea) -> Chart {
        let points = project_points(&self.trend, area);
        Chart {
            area: *area,
            polyline: points_attr(&points),
            area_path: area_path_d(&points, area),
            points,
        }
    }
}
