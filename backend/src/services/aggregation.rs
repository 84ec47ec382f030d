//! Per-site success/failure counting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{LaunchRecord, Site};

/// Launch counts for one site.
///
/// Only the total and the successes are stored; failures are always derived
/// from them, so the three numbers cannot disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteTally {
    count: usize,
    success_count: usize,
}

impl SiteTally {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn success_count(&self) -> usize {
        self.success_count
    }

    pub fn failure_count(&self) -> usize {
        self.count - self.success_count
    }

    fn record(&mut self, record: &LaunchRecord) {
        self.count += 1;
        if record.is_success() {
            self.success_count += 1;
        }
    }
}

/// Site to tally mapping. Carries no ordering; callers order by the site set.
pub type SiteAggregation = HashMap<Site, SiteTally>;

/// Group `records` by site and count launches and successes.
///
/// Single pass, independent of input order. Empty input yields an empty map.
pub fn aggregate_by_site<'a, I>(records: I) -> SiteAggregation
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    let mut tallies = SiteAggregation::new();
    for record in records {
        tallies.entry(record.site.clone()).or_default().record(record);
    }
    tallies
}

/// Tally for `site`, or an all-zero tally when the site has no launches.
pub fn tally_for(aggregation: &SiteAggregation, site: &Site) -> SiteTally {
    aggregation.get(site).copied().unwrap_or_default()
}

#[cfg(test)]
#[path = "aggregation_tests.rs"]
mod aggregation_tests;
