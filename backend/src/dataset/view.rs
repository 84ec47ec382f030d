//! Read-only in-memory launch table.

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{DashboardError, DashboardResult, ErrorContext};
use crate::models::{LaunchRecord, PayloadRange, SelectorState, Site, SiteSelection, ALL_SITES};
use crate::services::filtering::filter_records;

/// Observed payload extremes over the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: qtty::Kilograms,
    pub max: qtty::Kilograms,
}

impl PayloadBounds {
    /// The widest range the slider can express.
    pub fn as_range(&self) -> PayloadRange {
        PayloadRange {
            low: self.min,
            high: self.max,
        }
    }
}

/// Validated, immutable launch table.
///
/// Built once at load time. The site set and payload bounds are derived during
/// construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct DatasetView {
    records: Vec<LaunchRecord>,
    sites: Vec<Site>,
    bounds: PayloadBounds,
}

impl DatasetView {
    /// Build a view over `records`.
    ///
    /// Fails with `EmptyDataset` when there are no records and with
    /// `ValidationError` when a payload mass is negative or not finite, or when a
    /// site is named like the `ALL` selector value and could never be selected.
    pub fn new(records: Vec<LaunchRecord>) -> DashboardResult<Self> {
        let Some(first) = records.first() else {
            return Err(DashboardError::empty_dataset("no launch records"));
        };

        let mut min = first.payload_mass.value();
        let mut max = min;

        for (row, record) in records.iter().enumerate() {
            let mass = record.payload_mass.value();
            if !mass.is_finite() || mass < 0.0 {
                return Err(DashboardError::validation_with_context(
                    format!("Payload mass must be a non-negative number, got {}", mass),
                    ErrorContext::new("load_dataset")
                        .with_entity("record")
                        .with_row(row),
                ));
            }
            if record.site.as_str() == ALL_SITES {
                return Err(DashboardError::validation_with_context(
                    format!(
                        "Launch site name '{}' is reserved for the all-sites selector",
                        ALL_SITES
                    ),
                    ErrorContext::new("load_dataset")
                        .with_entity("record")
                        .with_row(row),
                ));
            }
            min = min.min(mass);
            max = max.max(mass);
        }

        let sites = first_occurrence_sites(&records);

        let bounds = PayloadBounds {
            min: qtty::Kilograms::new(min),
            max: qtty::Kilograms::new(max),
        };

        info!(
            "Loaded {} launch records across {} sites (payload {} to {} kg)",
            records.len(),
            sites.len(),
            min,
            max
        );

        Ok(Self {
            records,
            sites,
            bounds,
        })
    }

    pub fn all_records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct sites in first-occurrence order.
    pub fn distinct_sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed view.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_site(&self, site: &Site) -> bool {
        self.sites.contains(site)
    }

    /// Look a site up by name.
    pub fn site(&self, name: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.as_str() == name)
    }

    /// Selector state the dashboard starts in: every site, full payload range.
    pub fn default_state(&self) -> SelectorState {
        SelectorState::new(SiteSelection::All, self.bounds.as_range())
    }

    /// Filter this dataset with the site and range predicates.
    pub fn filter(
        &self,
        selection: &SiteSelection,
        range: &PayloadRange,
    ) -> DashboardResult<Vec<&LaunchRecord>> {
        filter_records(&self.records, &self.sites, selection, range)
    }
}

fn first_occurrence_sites(records: &[LaunchRecord]) -> Vec<Site> {
    let mut seen: HashSet<&Site> = HashSet::new();
    let mut sites = Vec::new();
    for record in records {
        if seen.insert(&record.site) {
            sites.push(record.site.clone());
        }
    }
    sites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;

    fn record(site: &str, payload: f64) -> LaunchRecord {
        LaunchRecord::new(site, payload, "F9 v1.0", Outcome::Success)
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let err = DatasetView::new(vec![]).unwrap_err();
        assert!(matches!(err, DashboardError::EmptyDataset { .. }));
    }

    #[test]
    fn test_sites_in_first_occurrence_order() {
        let view = DatasetView::new(vec![
            record("VAFB SLC-4E", 500.0),
            record("CCAFS LC-40", 0.0),
            record("VAFB SLC-4E", 9600.0),
            record("KSC LC-39A", 2500.0),
            record("CCAFS LC-40", 525.0),
        ])
        .unwrap();

        let names: Vec<&str> = view.distinct_sites().iter().map(Site::as_str).collect();
        assert_eq!(names, vec!["VAFB SLC-4E", "CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn test_payload_bounds() {
        let view = DatasetView::new(vec![
            record("A", 3000.0),
            record("A", 0.0),
            record("B", 9600.0),
        ])
        .unwrap();

        let bounds = view.payload_bounds();
        assert_eq!(bounds.min.value(), 0.0);
        assert_eq!(bounds.max.value(), 9600.0);
        assert_eq!(bounds.as_range(), PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_single_record_bounds_collapse() {
        let view = DatasetView::new(vec![record("A", 1234.5)]).unwrap();
        assert_eq!(view.payload_bounds().min, view.payload_bounds().max);
        assert_eq!(view.len(), 1);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_negative_payload_is_rejected_with_row() {
        let err = DatasetView::new(vec![record("A", 10.0), record("A", -1.0)]).unwrap_err();
        assert!(matches!(err, DashboardError::ValidationError { .. }));
        assert_eq!(err.context().and_then(|c| c.row), Some(1));
    }

    #[test]
    fn test_nan_payload_is_rejected() {
        let err = DatasetView::new(vec![record("A", f64::NAN)]).unwrap_err();
        assert!(matches!(err, DashboardError::ValidationError { .. }));
    }

    #[test]
    fn test_reserved_site_name_is_rejected() {
        let err = DatasetView::new(vec![record("A", 1.0), record("ALL", 2.0)]).unwrap_err();
        assert!(matches!(err, DashboardError::ValidationError { .. }));
        assert_eq!(err.context().and_then(|c| c.row), Some(1));
    }

    #[test]
    fn test_site_lookup() {
        let view = DatasetView::new(vec![record("A", 1.0), record("B", 2.0)]).unwrap();
        assert!(view.contains_site(&Site::new("B")));
        assert!(!view.contains_site(&Site::new("C")));
        assert_eq!(view.site("A").map(Site::as_str), Some("A"));
        assert!(view.site("C").is_none());
    }

    #[test]
    fn test_default_state_covers_everything() {
        let view = DatasetView::new(vec![record("A", 100.0), record("B", 700.0)]).unwrap();
        let state = view.default_state();
        assert!(state.selected_site.is_all());
        assert_eq!(state.payload_range, PayloadRange::new(100.0, 700.0));
    }
}
