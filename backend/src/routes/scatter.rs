use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{LaunchRecord, Outcome, PayloadRange, SiteSelection};

// =========================================================
// Scatter (payload vs outcome) view types
// =========================================================

pub const X_FIELD: &str = "payload_mass";
pub const Y_FIELD: &str = "outcome";
pub const COLOR_FIELD: &str = "booster_version";

/// Title of the scatter chart in ALL mode.
pub const ALL_SITES_SCATTER_TITLE: &str = "Correlation between Payload and Success For All sites";

/// One plotted launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass: qtty::Kilograms,
    pub outcome: Outcome,
    pub booster_version: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass: record.payload_mass,
            outcome: record.outcome,
            booster_version: record.booster_version.clone(),
        }
    }
}

/// Input of the scatter view: the filtered launches, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterResult {
    pub points: Vec<ScatterPoint>,
}

impl ScatterResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.points.iter().filter(|p| p.outcome.is_success()).count()
    }

    /// Distinct booster versions in first-occurrence order (colour legend).
    pub fn booster_versions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.points
            .iter()
            .map(|p| p.booster_version.as_str())
            .filter(|v| seen.insert(*v))
            .collect()
    }
}

impl<'a> FromIterator<&'a LaunchRecord> for ScatterResult {
    fn from_iter<I: IntoIterator<Item = &'a LaunchRecord>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(ScatterPoint::from).collect(),
        }
    }
}

/// Point-cloud chart descriptor handed to the charting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_field: String,
    pub y_field: String,
    pub color_field: String,
    /// Visible x axis, pinned to the selected payload range
    pub x_range: PayloadRange,
    pub marker_size: u32,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    pub fn new(
        result: &ScatterResult,
        selection: &SiteSelection,
        range: PayloadRange,
        marker_size: u32,
    ) -> Self {
        Self {
            title: scatter_title(selection),
            x_field: X_FIELD.to_string(),
            y_field: Y_FIELD.to_string(),
            color_field: COLOR_FIELD.to_string(),
            x_range: range,
            marker_size,
            points: result.points.clone(),
        }
    }
}

pub fn scatter_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => ALL_SITES_SCATTER_TITLE.to_string(),
        SiteSelection::Site(site) => {
            format!("Correlation between Payload and Success For {}", site)
        }
    }
}
