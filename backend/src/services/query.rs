//! Query coordinator: selector state in, both view datasets out.

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::aggregation::aggregate_by_site;
use super::filtering::filter_records;
use crate::dataset::{get_dataset, DatasetView, ViewSettings};
use crate::error::DashboardResult;
use crate::models::{SelectorState, SiteSelection};
use crate::routes::breakdown::BreakdownResult;
use crate::routes::scatter::ScatterResult;
use crate::routes::DashboardViews;

/// Result of one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutput {
    pub breakdown: BreakdownResult,
    pub scatter: ScatterResult,
}

/// Recompute both views for `state` from scratch.
///
/// The scatter view honours both controls. The breakdown honours only the site
/// selector: in ALL mode it lists per-site success counts in site-set order, for
/// a single site it splits every launch from that site into successes and
/// failures regardless of payload. Invalid selector state is returned as an
/// error and never corrected here.
pub fn compute(dataset: &DatasetView, state: &SelectorState) -> DashboardResult<QueryOutput> {
    let filtered = filter_records(
        dataset.all_records(),
        dataset.distinct_sites(),
        &state.selected_site,
        &state.payload_range,
    )?;
    let aggregation = aggregate_by_site(dataset.all_records());

    let breakdown = match &state.selected_site {
        SiteSelection::All => BreakdownResult::all_sites(dataset.distinct_sites(), &aggregation),
        SiteSelection::Site(site) => BreakdownResult::single_site(site, &aggregation),
    };
    let scatter: ScatterResult = filtered.into_iter().collect();

    debug!(
        "Computed views for site={} payload=[{}, {}]: {} breakdown slices, {} scatter points",
        state.selected_site,
        state.payload_range.low.value(),
        state.payload_range.high.value(),
        breakdown.slices().len(),
        scatter.len()
    );

    Ok(QueryOutput { breakdown, scatter })
}

/// Stateless front door for the UI callback.
///
/// Holds only a shared read handle to the dataset; every call recomputes.
#[derive(Debug, Clone)]
pub struct QueryCoordinator {
    dataset: Arc<DatasetView>,
}

impl QueryCoordinator {
    pub fn new(dataset: Arc<DatasetView>) -> Self {
        Self { dataset }
    }

    /// Coordinator over the process-wide dataset installed by `init_dataset`.
    pub fn from_global() -> anyhow::Result<Self> {
        let dataset = get_dataset().context("Query coordinator needs a loaded dataset")?;
        Ok(Self::new(dataset))
    }

    pub fn dataset(&self) -> &DatasetView {
        &self.dataset
    }

    pub fn compute(&self, state: &SelectorState) -> DashboardResult<QueryOutput> {
        compute(&self.dataset, state)
    }

    /// Compute and wrap the results in chart descriptors.
    pub fn compute_views(
        &self,
        state: &SelectorState,
        view: &ViewSettings,
    ) -> DashboardResult<DashboardViews> {
        let output = self.compute(state)?;
        Ok(DashboardViews::build(&output, state, view))
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
