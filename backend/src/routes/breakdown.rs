use serde::{Deserialize, Serialize};

use crate::models::Site;
use crate::services::aggregation::{tally_for, SiteAggregation};

// =========================================================
// Breakdown (pie) view types
// =========================================================

pub const SUCCESS_LABEL: &str = "Success";
pub const FAILURES_LABEL: &str = "Failures";

/// Title of the breakdown chart in ALL mode.
pub const ALL_SITES_BREAKDOWN_TITLE: &str = "Total Successful Launches at all Sites";

/// One labelled slice of the proportion chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    pub label: String,
    pub value: usize,
}

impl BreakdownSlice {
    pub fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Input of the breakdown view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BreakdownResult {
    /// Success count per site, one slice per site in site-set order.
    AllSites { slices: Vec<BreakdownSlice> },
    /// Successes and failures over every launch from one site.
    SingleSite {
        site: Site,
        success: usize,
        failures: usize,
    },
}

impl BreakdownResult {
    /// Per-site success counts ordered by `sites`. Sites without successes get a 0 slice.
    pub fn all_sites(sites: &[Site], aggregation: &SiteAggregation) -> Self {
        let slices = sites
            .iter()
            .map(|site| BreakdownSlice::new(site.as_str(), tally_for(aggregation, site).success_count()))
            .collect();
        BreakdownResult::AllSites { slices }
    }

    /// Success/failure split for `site`; zero launches give a 0/0 split.
    pub fn single_site(site: &Site, aggregation: &SiteAggregation) -> Self {
        let tally = tally_for(aggregation, site);
        BreakdownResult::SingleSite {
            site: site.clone(),
            success: tally.success_count(),
            failures: tally.failure_count(),
        }
    }

    /// Slices in display order.
    pub fn slices(&self) -> Vec<BreakdownSlice> {
        match self {
            BreakdownResult::AllSites { slices } => slices.clone(),
            BreakdownResult::SingleSite {
                success, failures, ..
            } => vec![
                BreakdownSlice::new(SUCCESS_LABEL, *success),
                BreakdownSlice::new(FAILURES_LABEL, *failures),
            ],
        }
    }

    pub fn value_for(&self, label: &str) -> Option<usize> {
        self.slices()
            .into_iter()
            .find(|slice| slice.label == label)
            .map(|slice| slice.value)
    }

    pub fn total(&self) -> usize {
        match self {
            BreakdownResult::AllSites { slices } => slices.iter().map(|s| s.value).sum(),
            BreakdownResult::SingleSite {
                success, failures, ..
            } => success + failures,
        }
    }

    /// Nothing to divide: the chart renders as empty.
    pub fn is_degenerate(&self) -> bool {
        self.total() == 0
    }

    pub fn title(&self) -> String {
        match self {
            BreakdownResult::AllSites { .. } => ALL_SITES_BREAKDOWN_TITLE.to_string(),
            BreakdownResult::SingleSite { site, .. } => format!("SpaceX Launch data for {}", site),
        }
    }
}

/// Proportion chart descriptor handed to the charting layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownChart {
    pub title: String,
    pub slices: Vec<BreakdownSlice>,
    pub degenerate: bool,
}

impl From<&BreakdownResult> for BreakdownChart {
    fn from(result: &BreakdownResult) -> Self {
        Self {
            title: result.title(),
            slices: result.slices(),
            degenerate: result.is_degenerate(),
        }
    }
}
